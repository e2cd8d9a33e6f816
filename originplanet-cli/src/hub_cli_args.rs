use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use colored::*;
use originplanet_core::{Evaluator, EvaluatorOptions, OverflowPolicy, DEFAULT_MAX_OPERAND_LEN};

use crate::stdio_printer::StdioPrinter;

pub const USAGE_EXIT_CODE: i32 = 2;

const BIN_NAME: &'static str = "originplanet-hub";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct HubCliArgs {
    /// Expression to evaluate, of the form <integer>+<integer>.
    #[arg(
        long = "eval",
        value_name = "EXPRESSION",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub expression: OsString,

    /// Let sums wrap around instead of failing when they overflow.
    #[arg(short, long)]
    pub wrapping: bool,

    /// Longest operand to accept, in bytes.
    #[arg(long, value_name = "LEN", default_value_t = DEFAULT_MAX_OPERAND_LEN)]
    pub max_operand_len: usize,

    /// Accept operands of any length.
    #[arg(long, conflicts_with = "max_operand_len")]
    pub no_operand_limit: bool,
}

impl HubCliArgs {
    pub fn create_evaluator(&self) -> Evaluator {
        let mut options = EvaluatorOptions::default();
        options.max_operand_len = if self.no_operand_limit {
            None
        } else {
            Some(self.max_operand_len)
        };
        if self.wrapping {
            options.overflow = OverflowPolicy::Wrapping;
        }
        Evaluator::new(options)
    }
}

/// Reports a failure to parse the command line and returns the exit code
/// the process should exit with.
pub fn report_args_error<O: Write, E: Write>(
    err: clap::Error,
    printer: &mut StdioPrinter<O, E>,
) -> i32 {
    if !err.use_stderr() {
        // This is --help or --version, which isn't really an error.
        let _ = printer.print(err.to_string());
        let _ = printer.print_buffered_output();
        return 0;
    }
    if let Some(line) = err.to_string().lines().next() {
        printer.eprintln(line.red().to_string());
    }
    printer.eprintln(format!("Usage: {BIN_NAME} --eval <expression>").yellow().to_string());
    printer.eprintln(format!("Example: {BIN_NAME} --eval 2+3").yellow().to_string());
    USAGE_EXIT_CODE
}
