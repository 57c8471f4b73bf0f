//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes
//! - Money error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{MonetaConfig, RateSourceKind, RatesConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::Currency;
