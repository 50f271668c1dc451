#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for calculator integration tests

use std::sync::Arc;

use calculator::{CalculatorModule, domain::Service};
use calculator_sdk::CalculatorClientV1;

/// Relative tolerance for floating-point comparisons.
pub const REL_TOLERANCE: f64 = 1e-12;

pub fn create_service() -> Service {
    Service::new()
}

pub fn create_client() -> Arc<dyn CalculatorClientV1> {
    CalculatorModule::new().client()
}

/// Asserts that `actual` is within `REL_TOLERANCE` of `expected`.
pub fn assert_approx_eq(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= REL_TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}
