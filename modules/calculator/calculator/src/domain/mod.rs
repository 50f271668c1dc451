//! Domain layer for calculator module
//!
//! Contains business logic for arithmetic operations.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
