//! Rate source backed by a preloaded table.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use moneta_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{RateSource, pair_key, rate_from_json};

/// Static `FROM_TO -> rate` table.
///
/// Only direct pairs are answered; there is no inversion or routing
/// through a third currency.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    rates: HashMap<String, Decimal>,
}

impl StaticTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rate for `from -> to`.
    ///
    /// Fails with `DataSource` if the rate is not positive.
    pub fn insert(&mut self, from: Currency, to: Currency, rate: Decimal) -> MoneyResult<()> {
        if rate <= Decimal::ZERO {
            return Err(MoneyError::DataSource(format!(
                "rate for {} must be positive, got {rate}",
                pair_key(&from, &to)
            )));
        }
        self.rates.insert(pair_key(&from, &to), rate);
        Ok(())
    }

    /// Builder-style variant of [`StaticTable::insert`].
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> MoneyResult<Self> {
        self.insert(from, to, rate)?;
        Ok(self)
    }

    /// Parses a table from a JSON object mapping `"FROM_TO"` to a number or
    /// numeric string.
    pub fn from_json_str(json: &str) -> MoneyResult<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| MoneyError::DataSource(format!("invalid rate table: {e}")))?;

        let mut rates = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let key = normalize_key(&key)?;
            let rate = rate_from_json(&value)
                .map_err(|reason| MoneyError::DataSource(format!("rate {key}: {reason}")))?;
            rates.insert(key, rate);
        }

        Ok(Self { rates })
    }

    /// Reads and parses a rate table file.
    pub fn from_json_file(path: impl AsRef<Path>) -> MoneyResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            MoneyError::DataSource(format!("cannot read {}: {e}", path.display()))
        })?;

        let table = Self::from_json_str(&json)?;
        info!(path = %path.display(), pairs = table.len(), "Loaded static rate table");
        Ok(table)
    }

    /// Number of pairs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the table holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Validates a `FROM_TO` key and returns it uppercased.
fn normalize_key(key: &str) -> MoneyResult<String> {
    let invalid = || MoneyError::DataSource(format!("rate key '{key}' is not of the form FROM_TO"));

    let (from, to) = key.split_once('_').ok_or_else(invalid)?;
    let from = Currency::parse(from).map_err(|_| invalid())?;
    let to = Currency::parse(to).map_err(|_| invalid())?;
    Ok(pair_key(&from, &to))
}

impl RateSource for StaticTable {
    fn rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
        let key = pair_key(from, to);
        let rate = self
            .rates
            .get(&key)
            .copied()
            .ok_or_else(|| MoneyError::rate_lookup(from.as_str(), to.as_str(), "no rate in table"))?;

        debug!(pair = %key, %rate, "Static rate lookup");
        Ok(rate)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_lookup_present_pair() {
        let table = StaticTable::new()
            .with_rate(Currency::EUR, Currency::USD, dec!(1.3))
            .unwrap();

        assert_eq!(table.rate(&Currency::EUR, &Currency::USD).unwrap(), dec!(1.3));
    }

    #[test]
    fn test_missing_pair_is_rate_lookup_error() {
        let table = StaticTable::new()
            .with_rate(Currency::EUR, Currency::USD, dec!(1.3))
            .unwrap();

        // No implicit inversion.
        let err = table.rate(&Currency::USD, &Currency::EUR).unwrap_err();
        assert_eq!(err, MoneyError::rate_lookup("USD", "EUR", "no rate in table"));
    }

    #[test]
    fn test_insert_rejects_non_positive_rate() {
        let mut table = StaticTable::new();
        assert!(table.insert(Currency::EUR, Currency::USD, dec!(0)).is_err());
        assert!(table.insert(Currency::EUR, Currency::USD, dec!(-1)).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_json_accepts_numbers_and_strings() {
        let table = StaticTable::from_json_str(
            r#"{"EUR_USD": 1.3, "usd_eur": "0.77", "GBP_USD": "1.5"}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rate(&Currency::EUR, &Currency::USD).unwrap(), dec!(1.3));
        assert_eq!(table.rate(&Currency::USD, &Currency::EUR).unwrap(), dec!(0.77));
        assert_eq!(table.rate(&Currency::GBP, &Currency::USD).unwrap(), dec!(1.5));
    }

    #[test]
    fn test_from_json_rejects_bad_entries() {
        assert!(matches!(
            StaticTable::from_json_str(r#"{"EURUSD": 1.3}"#),
            Err(MoneyError::DataSource(_))
        ));
        assert!(matches!(
            StaticTable::from_json_str(r#"{"EUR_USD": "fast"}"#),
            Err(MoneyError::DataSource(_))
        ));
        assert!(matches!(
            StaticTable::from_json_str(r#"{"EUR_USD": 0}"#),
            Err(MoneyError::DataSource(_))
        ));
        assert!(matches!(
            StaticTable::from_json_str("[]"),
            Err(MoneyError::DataSource(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"EUR_USD": 1.3}}"#).unwrap();

        let table = StaticTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
