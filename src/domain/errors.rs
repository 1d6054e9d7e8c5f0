// ============================================================================
// Money Errors
// Precondition failures raised by guards and operations
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors returned by money construction and operations.
///
/// Every variant is a local misuse or arithmetic failure, never a transient
/// condition. Each one carries the operands that triggered it so the caller
/// can fix the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("currency mismatch: {left} cannot be combined with {right}")]
    DifferentCurrency { left: String, right: String },

    #[error("scale mismatch: {left} differs from {right}")]
    DifferentScale { left: u32, right: u32 },

    #[error("invalid scale {scale}: must be a non-negative integer that fits in 32 bits")]
    InvalidScale { scale: i64 },

    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount { amount: String, reason: NumericError },

    #[error("{operation} requires at least one value")]
    EmptyInput { operation: &'static str },

    #[error("invalid ratios {ratios:?}: {reason}")]
    InvalidRatios {
        ratios: Vec<String>,
        reason: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("no currency given and the factory has no default currency")]
    MissingCurrency,

    #[error("{code} uses base {base}; decimal rendering needs base 10")]
    NonDecimalCurrency { code: String, base: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Arithmetic(NumericError),
}

impl From<NumericError> for MoneyError {
    fn from(error: NumericError) -> Self {
        match error {
            NumericError::DivisionByZero => MoneyError::DivisionByZero,
            NumericError::EmptyInput => MoneyError::EmptyInput {
                operation: "calculator aggregate",
            },
            other => MoneyError::Arithmetic(other),
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
