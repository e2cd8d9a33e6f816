use std::io::{stdin, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use originplanet_core::{PageCommand, DEFAULT_PAGE_FILENAME};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct PageCliArgs {
    /// Command to run: `helloc` prints a greeting, `chtml` writes the page.
    pub keyword: Option<String>,

    /// Where to write the HTML page.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PAGE_FILENAME)]
    pub output: PathBuf,

    /// Report the path of the written page.
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't wait for Enter when no command was recognized.
    #[arg(long)]
    pub no_prompt: bool,
}

impl PageCliArgs {
    pub fn command(&self) -> Option<PageCommand> {
        self.keyword.as_ref().and_then(PageCommand::from_keyword)
    }

    /// Returns the keyword if it was given but isn't a command.
    pub fn unrecognized_keyword(&self) -> Option<&str> {
        match self.command() {
            Some(_) => None,
            None => self.keyword.as_deref(),
        }
    }

    pub fn should_prompt(&self) -> bool {
        self.command().is_none() && !self.no_prompt && stdin().is_terminal()
    }
}
