//! Public error types for the `calculator` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `CalculatorClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CalculatorError {
    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub const fn division_by_zero(dividend: i64) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` if this is a division by zero error.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}
