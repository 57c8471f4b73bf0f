//! Registry of currency codes the exchange accepts.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use moneta_shared::{Currency, MoneyError, MoneyResult};
use serde::Deserialize;
use tracing::info;

/// Immutable set of valid currency codes.
///
/// Loaded once at startup and shared read-only between every `Exchange`
/// that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRegistry {
    codes: BTreeSet<Currency>,
}

/// Accepted shapes for a currency data file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyFile {
    /// `["USD", "EUR"]`
    List(Vec<String>),
    /// `{"USD": "US Dollar", "EUR": "Euro"}`
    Named(BTreeMap<String, serde_json::Value>),
}

impl CurrencyRegistry {
    /// Builds a registry from currency codes.
    ///
    /// Fails with `DataSource` if no codes are given, or with the parse
    /// error of the first malformed code.
    pub fn from_codes<I, S>(codes: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| Currency::parse(code.as_ref()))
            .collect::<MoneyResult<BTreeSet<_>>>()?;

        if codes.is_empty() {
            return Err(MoneyError::DataSource(
                "currency registry must contain at least one code".to_string(),
            ));
        }

        Ok(Self { codes })
    }

    /// Parses a registry from JSON: either an array of codes or an object
    /// keyed by code.
    pub fn from_json_str(json: &str) -> MoneyResult<Self> {
        let file: CurrencyFile = serde_json::from_str(json)
            .map_err(|e| MoneyError::DataSource(format!("invalid currency data: {e}")))?;

        match file {
            CurrencyFile::List(codes) => Self::from_codes(codes),
            CurrencyFile::Named(named) => Self::from_codes(named.keys()),
        }
    }

    /// Reads and parses a registry file.
    pub fn from_json_file(path: impl AsRef<Path>) -> MoneyResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            MoneyError::DataSource(format!("cannot read {}: {e}", path.display()))
        })?;

        let registry = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            count = registry.len(),
            "Loaded currency registry"
        );
        Ok(registry)
    }

    /// Returns true if the currency is registered.
    #[must_use]
    pub fn contains(&self, currency: &Currency) -> bool {
        self.codes.contains(currency)
    }

    /// Returns true if `code` parses and is registered.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        Currency::parse(code).is_ok_and(|currency| self.contains(&currency))
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a constructed registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates registered currencies in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_codes() {
        let registry = CurrencyRegistry::from_codes(["USD", "eur", "GBP"]).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(&Currency::USD));
        assert!(registry.contains(&Currency::EUR));
        assert!(registry.contains_code("gbp"));
        assert!(!registry.contains_code("NOK"));
        assert!(!registry.contains_code("not a code"));
    }

    #[test]
    fn test_from_codes_rejects_empty() {
        let result = CurrencyRegistry::from_codes(Vec::<String>::new());
        assert!(matches!(result, Err(MoneyError::DataSource(_))));
    }

    #[test]
    fn test_from_codes_rejects_malformed() {
        let result = CurrencyRegistry::from_codes(["USD", "DOLLAR"]);
        assert_eq!(result, Err(MoneyError::InvalidCurrency("DOLLAR".to_string())));
    }

    #[test]
    fn test_from_json_list() {
        let registry = CurrencyRegistry::from_json_str(r#"["USD", "EUR"]"#).unwrap();
        let codes: Vec<_> = registry.iter().map(Currency::as_str).collect();
        assert_eq!(codes, vec!["EUR", "USD"]);
    }

    #[test]
    fn test_from_json_object() {
        let registry =
            CurrencyRegistry::from_json_str(r#"{"USD": "US Dollar", "GBP": "Pound"}"#).unwrap();
        assert!(registry.contains(&Currency::USD));
        assert!(registry.contains(&Currency::GBP));
        assert!(!registry.contains(&Currency::EUR));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = CurrencyRegistry::from_json_str("42");
        assert!(matches!(result, Err(MoneyError::DataSource(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["USD", "EUR", "GBP"]"#).unwrap();

        let registry = CurrencyRegistry::from_json_file(file.path()).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CurrencyRegistry::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(MoneyError::DataSource(_))));
    }
}
