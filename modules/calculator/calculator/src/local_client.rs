//! Local client implementing the `CalculatorClientV1` trait.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClientV1, CalculatorError};
use tracing::instrument;

use crate::domain::Service;

/// Local client for the calculator module.
///
/// This client implements the `CalculatorClientV1` trait and delegates
/// to the domain service in-process. It is what `CalculatorModule` hands
/// out to consumers.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub const fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorLocalClient {
    #[instrument(skip(self), level = "trace")]
    async fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        Ok(self.service.add(a, b))
    }

    #[instrument(skip(self), level = "trace")]
    async fn subtract(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        Ok(self.service.subtract(a, b))
    }

    #[instrument(skip(self), level = "trace")]
    async fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        Ok(self.service.multiply(a, b))
    }

    #[instrument(skip(self), level = "trace")]
    async fn divide(&self, a: i64, b: i64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(CalculatorError::from)
    }
}
