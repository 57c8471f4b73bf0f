//! The money value type.
//!
//! This module implements:
//! - `Money` construction, accessors and formatting
//! - Cross-currency arithmetic and comparison through an `Exchange`
//! - `to_<ccy>` conversion shorthands
//! - Thread-scoped default currency

pub mod amount;
pub mod default;
pub mod dispatch;
pub mod ops;
pub mod value;

#[cfg(test)]
mod props;

pub use amount::IntoAmount;
pub use default::default_currency;
pub use dispatch::conversion_target;
pub use ops::CANONICAL_CURRENCY;
pub use value::{DISPLAY_DECIMAL_PLACES, Money};
