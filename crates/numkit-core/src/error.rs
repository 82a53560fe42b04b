//! Error type shared by the computation routines.

/// Error type for numkit computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Input lies outside the mathematical domain of the operation.
    #[error("domain error: factorial is undefined for negative input {0}")]
    Domain(i64),

    /// Input exceeds the configured recursion limit.
    #[error("input {n} exceeds the factorial limit of {limit}")]
    TooLarge { n: u64, limit: u64 },

    /// Result does not fit in the requested machine type.
    #[error("overflow: {0}! does not fit in 64 bits")]
    Overflow(i64),

    /// An integer sum, difference or product overflowed the operand type.
    #[error("overflow: {0} does not fit in the operand type")]
    ArithmeticOverflow(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
