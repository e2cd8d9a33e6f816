/// The longest operand accepted by default, in bytes. Anything of 64 bytes
/// or more is rejected.
pub const DEFAULT_MAX_OPERAND_LEN: usize = 63;

/// What happens when a sum (or a literal) doesn't fit in an `i64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with an overflow error.
    #[default]
    Checked,
    /// Wrap the sum around, and clamp out-of-range literals to the nearest
    /// representable value.
    Wrapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// `None` means operands may be any length.
    pub max_operand_len: Option<usize>,
    pub overflow: OverflowPolicy,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        EvaluatorOptions {
            max_operand_len: Some(DEFAULT_MAX_OPERAND_LEN),
            overflow: OverflowPolicy::default(),
        }
    }
}
