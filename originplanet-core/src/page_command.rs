use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::{html_page::create_html_file, page_error::PageError};

pub const GREETING: &'static str = "Hello, C.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    /// Print a greeting.
    Hello,
    /// Write the HTML page.
    CreateHtml,
}

impl PageCommand {
    /// Keywords are matched exactly, so `HELLOC` isn't a command.
    pub fn from_keyword<T: AsRef<str>>(keyword: T) -> Option<Self> {
        match keyword.as_ref() {
            "helloc" => Some(PageCommand::Hello),
            "chtml" => Some(PageCommand::CreateHtml),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            PageCommand::Hello => "helloc",
            PageCommand::CreateHtml => "chtml",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PageOutput {
    PageWritten(PathBuf),
    Greeting,
}

impl Display for PageOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageOutput::PageWritten(path) => write!(f, "Wrote {}", path.display()),
            PageOutput::Greeting => GREETING.fmt(f),
        }
    }
}

/// Runs the given command, if any, and returns what it produced.
///
/// The page is always written before the command runs, whether or not
/// there's a command at all. `CreateHtml` therefore has nothing further
/// to do.
pub fn run_page_command<P: AsRef<Path>>(
    command: Option<PageCommand>,
    page_path: P,
) -> Result<Vec<PageOutput>, PageError> {
    let page_path = page_path.as_ref();
    create_html_file(page_path)?;
    let mut output = vec![PageOutput::PageWritten(page_path.to_path_buf())];

    match command {
        Some(PageCommand::Hello) => output.push(PageOutput::Greeting),
        Some(PageCommand::CreateHtml) | None => {}
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::{PageCommand, PageOutput};

    #[test]
    fn it_parses_keywords() {
        assert_eq!(PageCommand::from_keyword("helloc"), Some(PageCommand::Hello));
        assert_eq!(
            PageCommand::from_keyword("chtml"),
            Some(PageCommand::CreateHtml)
        );
    }

    #[test]
    fn it_rejects_unknown_keywords() {
        for keyword in ["", "HELLOC", "hello", " chtml", "chtml "] {
            assert_eq!(PageCommand::from_keyword(keyword), None, "keyword {keyword:?}");
        }
    }

    #[test]
    fn keywords_roundtrip() {
        for command in [PageCommand::Hello, PageCommand::CreateHtml] {
            assert_eq!(PageCommand::from_keyword(command.keyword()), Some(command));
        }
    }

    #[test]
    fn greeting_output_displays_greeting() {
        assert_eq!(PageOutput::Greeting.to_string(), "Hello, C.");
    }
}
