//! `CalculatorClientV1` trait definition.
//!
//! Contract trait for the calculator service. Consumers hold an
//! `Arc<dyn CalculatorClientV1>` and never depend on the implementation.

use async_trait::async_trait;

use crate::error::CalculatorError;
use crate::models::{Evaluation, Operation, Value};

/// Calculator API trait
///
/// Performs the four basic arithmetic operations over `i64` operands.
/// Integer operations are total; `divide` is the only operation that can fail
/// on valid input.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the implementation cannot reach the service
    async fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Subtract `b` from `a` and return the difference.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the implementation cannot reach the service
    async fn subtract(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the implementation cannot reach the service
    async fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Divide `a` by `b` and return the floating-point quotient.
    ///
    /// # Errors
    ///
    /// * `DivisionByZero` - If `b` is zero
    /// * `Internal` - If the implementation cannot reach the service
    async fn divide(&self, a: i64, b: i64) -> Result<f64, CalculatorError>;

    /// Apply `operation` to the operands and return the full evaluation.
    ///
    /// # Errors
    ///
    /// Returns whatever the dispatched operation returns.
    async fn evaluate(
        &self,
        operation: Operation,
        a: i64,
        b: i64,
    ) -> Result<Evaluation, CalculatorError> {
        let value = match operation {
            Operation::Add => Value::Integer(self.add(a, b).await?),
            Operation::Subtract => Value::Integer(self.subtract(a, b).await?),
            Operation::Multiply => Value::Integer(self.multiply(a, b).await?),
            Operation::Divide => Value::Float(self.divide(a, b).await?),
        };
        Ok(Evaluation {
            operation,
            a,
            b,
            value,
        })
    }
}
