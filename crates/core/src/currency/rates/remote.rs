//! Rate source backed by an HTTP quote service.
//!
//! The service is queried with `GET <endpoint>?q=FROM_TO&compact=ultra` and
//! answers with a JSON object holding a `FROM_TO` field, e.g.
//! `{"EUR_USD": 1.3}` or `{"EUR_USD": "1.3"}`.

use std::time::Duration;

use moneta_shared::{Currency, MoneyError, MoneyResult, RatesConfig};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{RateSource, pair_key, rate_from_json};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of retries after a failed request.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Remote quote lookup with a bounded timeout and retry count.
#[derive(Debug, Clone)]
pub struct RemoteLookup {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    max_retries: u32,
}

/// Outcome of a single failed request.
enum FetchError {
    /// Transport failure or server-side status; worth another attempt.
    Transient(String),
    /// The service answered, but not with a usable quote.
    Fatal(String),
}

impl RemoteLookup {
    /// Creates a lookup against `endpoint` with default timeout and retry.
    pub fn new(endpoint: impl Into<String>) -> MoneyResult<Self> {
        Self::with_options(endpoint, DEFAULT_TIMEOUT, DEFAULT_MAX_RETRIES)
    }

    /// Creates a lookup with an explicit timeout and retry count.
    pub fn with_options(
        endpoint: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
    ) -> MoneyResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MoneyError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: None,
            max_retries,
        })
    }

    /// Builds a lookup from the `[rates]` configuration section.
    pub fn from_config(config: &RatesConfig) -> MoneyResult<Self> {
        let lookup = Self::with_options(
            config.require_endpoint()?,
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )?;

        Ok(match &config.api_key {
            Some(key) => lookup.with_api_key(key.clone()),
            None => lookup,
        })
    }

    /// Sends `apiKey=<key>` with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The configured quote endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch(&self, pair: &str) -> Result<Decimal, FetchError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", pair), ("compact", "ultra")]);

        if let Some(api_key) = &self.api_key {
            request = request.query(&[("apiKey", api_key.as_str())]);
        }

        let response = request
            .send()
            .map_err(|e| FetchError::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = format!("Request failed with status: {status}");
            return Err(if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                FetchError::Transient(reason)
            } else {
                FetchError::Fatal(reason)
            });
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| FetchError::Fatal(format!("malformed response: {e}")))?;

        parse_quote(&body, pair).map_err(FetchError::Fatal)
    }
}

/// Extracts the `pair` field from a quote response body.
pub fn parse_quote(body: &serde_json::Value, pair: &str) -> Result<Decimal, String> {
    let value = body
        .get(pair)
        .ok_or_else(|| format!("response has no field {pair}"))?;

    rate_from_json(value).map_err(|reason| format!("field {pair}: {reason}"))
}

impl RateSource for RemoteLookup {
    fn rate(&self, from: &Currency, to: &Currency) -> MoneyResult<Decimal> {
        let pair = pair_key(from, to);
        let mut attempt = 0;

        loop {
            match self.fetch(&pair) {
                Ok(rate) => {
                    debug!(pair = %pair, %rate, attempt, "Remote rate lookup");
                    return Ok(rate);
                }
                Err(FetchError::Transient(reason)) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(pair = %pair, attempt, reason = %reason, "Rate lookup failed, retrying");
                }
                Err(FetchError::Transient(reason) | FetchError::Fatal(reason)) => {
                    return Err(MoneyError::rate_lookup(from.as_str(), to.as_str(), reason));
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
