//! Exchange rate sources.
//!
//! A rate source answers one question: how many units of `to` is one unit
//! of `from` worth. Two implementations are provided:
//! - `StaticTable` - preloaded `FROM_TO` mapping
//! - `RemoteLookup` - HTTP quote service with timeout and retry

pub mod remote;
pub mod static_table;

use std::str::FromStr;

use moneta_shared::{Currency, MoneyResult};
use rust_decimal::Decimal;

pub use remote::RemoteLookup;
pub use static_table::StaticTable;

/// Capability to resolve a conversion multiplier between two currencies.
///
/// Implementations must return a strictly positive rate, or a
/// `MoneyError::RateLookup` describing why none could be produced.
/// Currency validation is the caller's job.
pub trait RateSource: Send + Sync {
    /// Returns the multiplier converting one unit of `from` into `to`.
    fn rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Key used by rate tables and quote services, e.g. `EUR_USD`.
#[must_use]
pub fn pair_key(from: &Currency, to: &Currency) -> String {
    format!("{from}_{to}")
}

/// Parses a textual rate, accepting plain and scientific notation.
///
/// Rejects zero and negative multipliers.
pub(crate) fn parse_rate(text: &str) -> Result<Decimal, String> {
    let text = text.trim();
    let rate = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| format!("'{text}' is not a number"))?;

    if rate <= Decimal::ZERO {
        return Err(format!("rate must be positive, got {rate}"));
    }
    Ok(rate)
}

/// Reads a rate from a JSON value holding a number or a numeric string.
pub(crate) fn rate_from_json(value: &serde_json::Value) -> Result<Decimal, String> {
    match value {
        serde_json::Value::String(text) => parse_rate(text),
        serde_json::Value::Number(number) => parse_rate(&number.to_string()),
        other => Err(format!("expected a number, got {other}")),
    }
}
