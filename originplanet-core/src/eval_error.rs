use std::{error::Error, fmt::Display, ops::Range};

use crate::evaluator::split_operands;

/// Which operand of an expression an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// No expression was provided at all.
    InvalidInput,
    NoOperator,
    EmptyOperand(Side),
    /// The operand is longer than the evaluator's configured limit.
    OperandTooLong(Side),
    /// The operand isn't entirely a base-10 integer literal, or (when
    /// overflow is checked) the literal doesn't fit in 64 bits.
    MalformedOperand(Side),
    Overflow,
}

impl EvalError {
    pub fn side(&self) -> Option<Side> {
        match self {
            EvalError::EmptyOperand(side)
            | EvalError::OperandTooLong(side)
            | EvalError::MalformedOperand(side) => Some(*side),
            _ => None,
        }
    }

    /// Returns the byte range of the operand that caused this error within
    /// the given expression, if the error is about a particular operand.
    ///
    /// The range of an empty operand is empty, and points at where the
    /// operand should have been.
    pub fn operand_range<T: AsRef<str>>(&self, expr: T) -> Option<Range<usize>> {
        let side = self.side()?;
        let (left, right) = split_operands(expr.as_ref())?;
        match side {
            Side::Left => Some(left),
            Side::Right => Some(right),
        }
    }
}

impl Error for EvalError {}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidInput => write!(f, "INVALID INPUT"),
            EvalError::NoOperator => write!(f, "NO OPERATOR"),
            EvalError::EmptyOperand(side) => write!(f, "EMPTY OPERAND ({side})"),
            EvalError::OperandTooLong(side) => write!(f, "OPERAND TOO LONG ({side})"),
            EvalError::MalformedOperand(side) => write!(f, "MALFORMED OPERAND ({side})"),
            EvalError::Overflow => write!(f, "OVERFLOW"),
        }
    }
}
