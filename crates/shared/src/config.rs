//! Configuration for currency data and rate sources.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MoneyError;

/// Top-level Moneta configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MonetaConfig {
    /// Path to the JSON file listing valid currency codes.
    #[serde(default = "default_currencies_path")]
    pub currencies_path: PathBuf,
    /// Exchange rate source configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

fn default_currencies_path() -> PathBuf {
    PathBuf::from("data/currencies.json")
}

/// Which rate source backs the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSourceKind {
    /// Preloaded `FROM_TO` table read from a JSON file.
    #[default]
    Static,
    /// HTTP quote service.
    Remote,
}

/// Exchange rate source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Selected rate source.
    #[serde(default)]
    pub source: RateSourceKind,
    /// Rate table file, required for the static source.
    #[serde(default = "default_table_path")]
    pub table_path: Option<PathBuf>,
    /// Quote endpoint, required for the remote source.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key appended to remote requests when present.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Remote request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How many times a failed remote lookup is retried.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_table_path() -> Option<PathBuf> {
    Some(PathBuf::from("data/exchange_rates.json"))
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    1
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            source: RateSourceKind::default(),
            table_path: default_table_path(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl RatesConfig {
    /// Returns the static table path or a `Config` error if it is missing.
    pub fn require_table_path(&self) -> Result<&Path, MoneyError> {
        self.table_path
            .as_deref()
            .ok_or_else(|| MoneyError::Config("rates.table_path is required for static rates".into()))
    }

    /// Returns the remote endpoint or a `Config` error if it is missing.
    pub fn require_endpoint(&self) -> Result<&str, MoneyError> {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or_else(|| MoneyError::Config("rates.endpoint is required for remote rates".into()))
    }
}

impl MonetaConfig {
    /// Loads configuration from the `config/` directory and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, MoneyError> {
        Self::load_from("config")
    }

    /// Loads configuration from `default` and `RUN_MODE` files in `dir`,
    /// then `MONETA__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, MoneyError> {
        let dir = dir.as_ref();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            .add_source(
                config::Environment::with_prefix("MONETA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
