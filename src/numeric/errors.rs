// ============================================================================
// Numeric Errors
// Error types for calculator arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur inside a [`Calculator`](crate::calculator::Calculator).
///
/// These know nothing about currencies or scales. The money layer lifts them
/// into [`MoneyError`](crate::domain::MoneyError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded the backend's maximum value
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result fell below the backend's minimum value
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Divisor was the additive identity
    #[error("division by zero")]
    DivisionByZero,
    /// Aggregate requested over zero values
    #[error("empty input: at least one value is required")]
    EmptyInput,
    /// Input string or host value could not be converted
    #[error("invalid input: could not convert value")]
    InvalidInput,
    /// Value has a fractional part the backend must not carry
    #[error("non-integral value: amounts must be whole minor units")]
    NonIntegral,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
