//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use tracing::debug;

use super::error::DomainError;

/// Domain service that performs arithmetic operations.
///
/// This is a stateless service: every operation is a pure function of its
/// operands, so instances are free to create, copy and share across threads.
/// Integer operations wrap on overflow and never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    /// Subtract `b` from `a` and return the difference.
    #[must_use]
    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    /// Multiply two numbers and return the product.
    #[must_use]
    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b` and return the floating-point quotient.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when `b` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn divide(&self, a: i64, b: i64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(DomainError::division_by_zero(a));
        }
        Ok(a as f64 / b as f64)
    }
}
