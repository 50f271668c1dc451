//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//! - `CalculatorClientV1` trait, the injectable calculator abstraction
//! - `Operation`, `Value` and `Evaluation` models
//! - `CalculatorError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! let client: Arc<dyn CalculatorClientV1> = module.client();
//!
//! let sum = client.add(2, 3).await?;
//! let quotient = client.divide(10, 2).await?;
//!
//! // Dispatch by operation
//! let evaluation = client.evaluate(Operation::Divide, 5, 2).await?;
//! println!("{evaluation}");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::CalculatorClientV1;
pub use error::CalculatorError;
pub use models::{Evaluation, Operation, ParseOperationError, Value};

/// Service name constant for the calculator service.
pub const SERVICE_NAME: &str = "calculator.v1.CalculatorService";
