mod eval_error;
mod evaluator;
mod evaluator_options;
mod html_page;
mod page_command;
mod page_error;

pub use eval_error::{EvalError, Side};
pub use evaluator::{
    evaluate, evaluate_optional, evaluate_with, split_operands, Evaluator, OPERATOR,
};
pub use evaluator_options::{EvaluatorOptions, OverflowPolicy, DEFAULT_MAX_OPERAND_LEN};
pub use html_page::{create_html_file, write_html_page, DEFAULT_PAGE_FILENAME, HTML_DOCUMENT};
pub use page_command::{run_page_command, PageCommand, PageOutput, GREETING};
pub use page_error::PageError;
