mod page_cli_args;
mod stdio_page;
mod stdio_printer;

use clap::Parser;
use page_cli_args::PageCliArgs;
use stdio_page::StdioPage;
use stdio_printer::StdioPrinter;

fn main() {
    stdio_printer::configure_colors();
    let args = PageCliArgs::parse();
    let printer: StdioPrinter = StdioPrinter::default();
    let mut page = StdioPage::new(args, printer);
    let exit_code = page.run();
    std::process::exit(exit_code);
}
