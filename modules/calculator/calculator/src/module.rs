//! Calculator Module definition
//!
//! Owns the domain service and hands out `CalculatorClientV1` handles.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, SERVICE_NAME};

use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Calculator module.
///
/// Exposes the calculator service to consumers through the
/// `CalculatorClientV1` trait object, so callers can be handed any other
/// implementation in its place.
pub struct CalculatorModule {
    service: Arc<Service>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorModule {
    /// Initialize the module and its domain service.
    #[must_use]
    pub fn new() -> Self {
        tracing::info!(service = SERVICE_NAME, "Initializing calculator module");

        let service = Arc::new(Service::new());

        tracing::info!("calculator module initialized");
        Self { service }
    }

    /// Domain service backing this module.
    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// Returns a client bound to this module's service.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::new(CalculatorLocalClient::new(self.service()))
    }
}
