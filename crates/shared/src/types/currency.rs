//! Three-letter currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// ISO 4217 style currency code (e.g., "USD", "EUR").
///
/// Always three uppercase ASCII letters. Whether a code is actually usable
/// is decided by a currency registry, not by this type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// US Dollar
    pub const USD: Self = Self(*b"USD");
    /// Euro
    pub const EUR: Self = Self(*b"EUR");
    /// Pound Sterling
    pub const GBP: Self = Self(*b"GBP");

    /// Parses a currency code, trimming whitespace and uppercasing.
    ///
    /// A blank code is an `InvalidArgument` (no currency given); anything
    /// other than three ASCII letters is an `InvalidCurrency`.
    pub fn parse(code: &str) -> Result<Self, MoneyError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidArgument("No currency given".to_string()));
        }

        let upper = trimmed.to_ascii_uppercase();
        match *upper.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(u8::is_ascii_alphabetic) => Ok(Self([a, b, c])),
            _ => Err(MoneyError::InvalidCurrency(upper)),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.as_str()).finish()
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
