//! Calculator Module
//!
//! A stateless arithmetic service performing addition, subtraction,
//! multiplication and division over `i64` operands.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `domain/error.rs` - Domain errors and their mapping to the SDK error
//! - `local_client.rs` - In-process `CalculatorClientV1` implementation
//! - `module.rs` - Module wiring
//!
//! External consumers should depend on `calculator-sdk` and obtain an
//! `Arc<dyn CalculatorClientV1>` from `CalculatorModule::client()`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === INTERNAL MODULES ===
pub mod domain;
pub mod local_client;

pub use local_client::CalculatorLocalClient;
