mod hub_cli_args;
mod stdio_evaluator;
mod stdio_printer;

use clap::Parser;
use hub_cli_args::{report_args_error, HubCliArgs};
use stdio_evaluator::StdioEvaluator;
use stdio_printer::StdioPrinter;

fn main() {
    stdio_printer::configure_colors();
    let mut printer: StdioPrinter = StdioPrinter::default();
    let args = match HubCliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => std::process::exit(report_args_error(err, &mut printer)),
    };
    let mut evaluator = StdioEvaluator::new(args, printer);
    let exit_code = evaluator.run();
    std::process::exit(exit_code);
}
