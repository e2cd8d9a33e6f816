use std::ops::Range;

use crate::{
    eval_error::{EvalError, Side},
    evaluator_options::{EvaluatorOptions, OverflowPolicy},
};

/// The only operator an expression may contain.
pub const OPERATOR: char = '+';

/// Evaluate an expression of the form `<integer>+<integer>` using the
/// default options.
pub fn evaluate<T: AsRef<str>>(expr: T) -> Result<i64, EvalError> {
    Evaluator::default().evaluate(expr)
}

/// Like `evaluate()`, but an absent expression is an `InvalidInput` error.
pub fn evaluate_optional<T: AsRef<str>>(expr: Option<T>) -> Result<i64, EvalError> {
    Evaluator::default().evaluate_optional(expr)
}

pub fn evaluate_with<T: AsRef<str>>(
    expr: T,
    options: &EvaluatorOptions,
) -> Result<i64, EvalError> {
    Evaluator::new(options.clone()).evaluate(expr)
}

/// Splits the given expression at its first `+`, returning the byte ranges
/// of the left and right operands. Either range may be empty.
///
/// Only the first `+` is significant, so `1++2` splits into `1` and `+2`.
pub fn split_operands(expr: &str) -> Option<(Range<usize>, Range<usize>)> {
    let index = expr.find(OPERATOR)?;
    Some((0..index, index + OPERATOR.len_utf8()..expr.len()))
}

/// Whitespace allowed before an operand. Unlike `char::is_ascii_whitespace`,
/// this includes vertical tab.
fn is_operand_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    options: EvaluatorOptions,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Evaluator { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn evaluate_optional<T: AsRef<str>>(&self, expr: Option<T>) -> Result<i64, EvalError> {
        let Some(expr) = expr else {
            return Err(EvalError::InvalidInput);
        };
        self.evaluate(expr)
    }

    pub fn evaluate<T: AsRef<str>>(&self, expr: T) -> Result<i64, EvalError> {
        let expr = expr.as_ref();
        let Some((left_range, right_range)) = split_operands(expr) else {
            return Err(EvalError::NoOperator);
        };
        let left = &expr[left_range];
        let right = &expr[right_range];

        if left.is_empty() {
            return Err(EvalError::EmptyOperand(Side::Left));
        }
        if right.is_empty() {
            return Err(EvalError::EmptyOperand(Side::Right));
        }
        self.check_operand_len(Side::Left, left)?;
        self.check_operand_len(Side::Right, right)?;

        let left = self.parse_operand(Side::Left, left)?;
        let right = self.parse_operand(Side::Right, right)?;

        match self.options.overflow {
            OverflowPolicy::Checked => left.checked_add(right).ok_or(EvalError::Overflow),
            OverflowPolicy::Wrapping => Ok(left.wrapping_add(right)),
        }
    }

    fn check_operand_len(&self, side: Side, operand: &str) -> Result<(), EvalError> {
        match self.options.max_operand_len {
            Some(max) if operand.len() > max => Err(EvalError::OperandTooLong(side)),
            _ => Ok(()),
        }
    }

    /// Parses an entire operand as a base-10 integer: optional leading
    /// whitespace, an optional sign, then one or more digits and nothing
    /// else.
    fn parse_operand(&self, side: Side, operand: &str) -> Result<i64, EvalError> {
        let literal = operand.trim_start_matches(is_operand_whitespace);
        let (negative, digits) = match literal.as_bytes().first() {
            Some(b'-') => (true, &literal[1..]),
            Some(b'+') => (false, &literal[1..]),
            _ => (false, literal),
        };

        // Check the shape up front, since `str::parse` may report overflow
        // before it ever reaches a trailing non-digit.
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(EvalError::MalformedOperand(side));
        }

        match literal.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => match self.options.overflow {
                OverflowPolicy::Checked => Err(EvalError::MalformedOperand(side)),
                OverflowPolicy::Wrapping if negative => Ok(i64::MIN),
                OverflowPolicy::Wrapping => Ok(i64::MAX),
            },
        }
    }
}
