use std::io::{stderr, stdout, IsTerminal, Stderr, Stdout, Write};

/// Only diagnostics are colored, and they go to stderr, so coloring
/// follows stderr rather than stdout. `NO_COLOR` always wins.
fn should_color_stderr(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

pub fn configure_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    colored::control::set_override(should_color_stderr(stderr().is_terminal(), no_color));
}

/// Buffers stdout output by line and makes sure any partial line is
/// flushed before anything is written to stderr, so that diagnostics
/// always appear after the output that preceded them.
///
/// The sinks are generic so tests can capture what would have been
/// printed.
pub struct StdioPrinter<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
    line_buffer: String,
}

impl Default for StdioPrinter {
    fn default() -> Self {
        StdioPrinter::new(stdout(), stderr())
    }
}

impl<O: Write, E: Write> StdioPrinter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        StdioPrinter {
            out,
            err,
            line_buffer: String::new(),
        }
    }

    fn flush_line_buffer(&mut self) -> std::io::Result<()> {
        self.out.write_all(self.line_buffer.as_bytes())?;
        self.out.flush()?;
        self.line_buffer.clear();
        Ok(())
    }

    /// Returns any buffered output that hasn't yet been printed.
    pub fn pop_buffered_output(&mut self) -> String {
        std::mem::take(&mut self.line_buffer)
    }

    /// Print out any buffered output followed by a newline.
    pub fn print_buffered_output(&mut self) -> std::io::Result<()> {
        if !self.line_buffer.is_empty() {
            self.line_buffer.push('\n');
            self.flush_line_buffer()?;
        }
        Ok(())
    }

    /// Print the given string to stdout in a line-buffered way.
    pub fn print<T: AsRef<str>>(&mut self, value: T) -> std::io::Result<()> {
        for ch in value.as_ref().chars() {
            self.line_buffer.push(ch);
            if ch == '\n' {
                self.flush_line_buffer()?;
            }
        }
        Ok(())
    }

    /// Print any buffered output, then write the given string to stderr
    /// followed by a newline.
    pub fn eprintln<T: AsRef<str>>(&mut self, value: T) {
        // If stdout or stderr can't be written to, there's nowhere left
        // to report it.
        let _ = self.print_buffered_output();
        let _ = writeln!(self.err, "{}", value.as_ref());
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::{should_color_stderr, StdioPrinter};

    fn create_printer() -> StdioPrinter<Vec<u8>, Vec<u8>> {
        StdioPrinter::new(Vec::<u8>::new(), Vec::<u8>::new())
    }

    fn take_output(printer: StdioPrinter<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = printer.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn colors_follow_stderr() {
        assert!(should_color_stderr(true, false));
        assert!(!should_color_stderr(false, false));
        assert!(!should_color_stderr(true, true));
    }

    #[test]
    fn it_buffers_partial_lines() {
        let mut printer = create_printer();
        printer.print("hello ").unwrap();
        printer.print("there\nhow ").unwrap();
        assert_eq!(printer.pop_buffered_output(), "how ");
        assert_eq!(take_output(printer), ("hello there\n".to_string(), "".to_string()));
    }

    #[test]
    fn it_flushes_partial_lines_before_errors() {
        let mut printer = create_printer();
        printer.print("partial").unwrap();
        printer.eprintln("oops");
        assert_eq!(
            take_output(printer),
            ("partial\n".to_string(), "oops\n".to_string())
        );
    }

    #[test]
    fn print_buffered_output_does_nothing_when_empty() {
        let mut printer = create_printer();
        printer.print_buffered_output().unwrap();
        assert_eq!(take_output(printer), ("".to_string(), "".to_string()));
    }
}
