use std::io::{Stderr, Stdout, Write};

use crate::page_cli_args::PageCliArgs;
use crate::stdio_printer::StdioPrinter;
use colored::*;
use originplanet_core::{run_page_command, PageError, PageOutput};
use rustyline::{error::ReadlineError, DefaultEditor};

const PROMPT: &'static str = "Press Enter to continue...";

pub struct StdioPage<O: Write = Stdout, E: Write = Stderr> {
    args: PageCliArgs,
    printer: StdioPrinter<O, E>,
}

impl<O: Write, E: Write> StdioPage<O, E> {
    pub fn new(args: PageCliArgs, printer: StdioPrinter<O, E>) -> Self {
        StdioPage { args, printer }
    }

    fn show_page_output(&mut self, output: Vec<PageOutput>) -> Result<(), i32> {
        for output in output {
            match output {
                PageOutput::Greeting => {
                    if let Err(err) = self.printer.print(format!("{output}\n")) {
                        self.printer
                            .eprintln(format!("Error writing output: {err}").red().to_string());
                        return Err(1);
                    }
                }
                PageOutput::PageWritten(_) => {
                    if self.args.verbose {
                        self.printer.eprintln(output.to_string().dimmed().to_string());
                    }
                }
            }
        }
        Ok(())
    }

    fn show_error(&mut self, err: PageError) {
        self.printer.eprintln("Failed to create file".red().to_string());
        self.printer.eprintln(format!("| {err}").dimmed().to_string());
    }

    /// Waits for the user to press Enter. CTRL-C and EOF count as well.
    fn wait_for_enter(&mut self) -> Result<(), i32> {
        let Ok(mut rl) = DefaultEditor::new() else {
            self.printer.eprintln("Initializing DefaultEditor failed!");
            return Err(1);
        };
        let prompt = format!("{}{}", self.printer.pop_buffered_output(), PROMPT);
        match rl.readline(&prompt) {
            Ok(_) | Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(()),
            Err(err) => {
                self.printer.eprintln(format!("Error: {:?}", err));
                Err(1)
            }
        }
    }

    pub fn run(&mut self) -> i32 {
        match self.run_impl() {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self) -> Result<(), i32> {
        let output = match run_page_command(self.args.command(), &self.args.output) {
            Ok(output) => output,
            Err(err) => {
                self.show_error(err);
                return Err(1);
            }
        };
        self.show_page_output(output)?;

        if let Some(keyword) = self.args.unrecognized_keyword() {
            let message = format!(
                "Unrecognized command '{keyword}', expected 'helloc' or 'chtml'."
            );
            self.printer.eprintln(message.yellow().to_string());
        }

        if self.args.should_prompt() {
            self.wait_for_enter()?;
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn into_printer(self) -> StdioPrinter<O, E> {
        self.printer
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use originplanet_core::HTML_DOCUMENT;

    use super::StdioPage;
    use crate::page_cli_args::PageCliArgs;
    use crate::stdio_printer::StdioPrinter;

    fn run(args: &[&str]) -> (i32, String, String) {
        colored::control::set_override(false);
        let args = PageCliArgs::try_parse_from(
            ["originplanet-page", "--no-prompt"]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .unwrap();
        let printer = StdioPrinter::new(Vec::<u8>::new(), Vec::<u8>::new());
        let mut page = StdioPage::new(args, printer);
        let exit_code = page.run();
        let (out, err) = page.into_printer().into_inner();
        (
            exit_code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn helloc_greets_and_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.html");
        let path_str = path.to_str().unwrap();
        assert_eq!(
            run(&["helloc", "-o", path_str]),
            (0, "Hello, C.\n".to_string(), "".to_string())
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), HTML_DOCUMENT);
    }

    #[test]
    fn chtml_writes_page_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.html");
        let path_str = path.to_str().unwrap();
        assert_eq!(
            run(&["chtml", "-o", path_str]),
            (0, "".to_string(), "".to_string())
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), HTML_DOCUMENT);
    }

    #[test]
    fn verbose_reports_written_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.html");
        let path_str = path.to_str().unwrap();
        let (exit_code, _, err) = run(&["chtml", "-v", "-o", path_str]);
        assert_eq!(exit_code, 0);
        assert_eq!(err, format!("Wrote {path_str}\n"));
    }

    #[test]
    fn unrecognized_keyword_still_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.html");
        let path_str = path.to_str().unwrap();
        let (exit_code, out, err) = run(&["bogus", "-o", path_str]);
        assert_eq!(exit_code, 0);
        assert_eq!(out, "");
        assert!(err.contains("Unrecognized command 'bogus'"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), HTML_DOCUMENT);
    }

    #[test]
    fn unwritable_page_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("main.html");
        let path_str = path.to_str().unwrap();
        let (exit_code, out, err) = run(&["helloc", "-o", path_str]);
        assert_eq!(exit_code, 1);
        assert_eq!(out, "");
        assert!(err.starts_with("Failed to create file\n"));
    }
}
