use std::io::{Stderr, Stdout, Write};

use crate::hub_cli_args::HubCliArgs;
use crate::stdio_printer::StdioPrinter;
use colored::*;
use originplanet_core::{EvalError, Evaluator};

pub const PARSE_FAILURE_EXIT_CODE: i32 = 3;

const OUTPUT_FAILURE_EXIT_CODE: i32 = 1;

pub struct StdioEvaluator<O: Write = Stdout, E: Write = Stderr> {
    args: HubCliArgs,
    printer: StdioPrinter<O, E>,
    evaluator: Evaluator,
}

impl<O: Write, E: Write> StdioEvaluator<O, E> {
    pub fn new(args: HubCliArgs, printer: StdioPrinter<O, E>) -> Self {
        let evaluator = args.create_evaluator();
        StdioEvaluator {
            args,
            printer,
            evaluator,
        }
    }

    fn show_error(&mut self, expression: &str, err: &EvalError) {
        self.printer
            .eprintln(format!("Unsupported expression: {expression}").red().to_string());
        self.printer.eprintln(err.to_string().red().to_string());
        if let Some(range) = err.operand_range(expression) {
            // Columns are counted in characters so the carets line up under
            // non-ASCII input too.
            let start = expression[..range.start].chars().count();
            let width = expression[range].chars().count().max(1);
            self.printer
                .eprintln(format!("| {expression}").dimmed().to_string());
            self.printer.eprintln(
                format!("| {}{}", " ".repeat(start), "^".repeat(width))
                    .dimmed()
                    .to_string(),
            );
        }
    }

    pub fn run(&mut self) -> i32 {
        match self.run_impl() {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self) -> Result<(), i32> {
        // Undecodable bytes become U+FFFD, which can't appear in any valid
        // operand, so such expressions always fail like other bad input.
        let expression = self.args.expression.to_string_lossy().into_owned();
        let value = match self.evaluator.evaluate(&expression) {
            Ok(value) => value,
            Err(err) => {
                self.show_error(&expression, &err);
                return Err(PARSE_FAILURE_EXIT_CODE);
            }
        };
        if let Err(err) = self.printer.print(format!("{value}\n")) {
            self.printer
                .eprintln(format!("Error writing result: {err}").red().to_string());
            return Err(OUTPUT_FAILURE_EXIT_CODE);
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_printer(self) -> StdioPrinter<O, E> {
        self.printer
    }
}
