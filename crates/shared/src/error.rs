//! Error types shared by every Moneta crate.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic and currency exchange.
///
/// All errors are returned synchronously to the caller; nothing is recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A required argument was missing or could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Currency code is malformed or not present in the registry.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// A conversion-style operation name could not be resolved.
    #[error("Unknown method: {0}")]
    UnknownOperation(String),

    /// Scalar division by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The rate source could not produce a multiplier.
    #[error("Rate lookup failed for {from} to {to}: {reason}")]
    RateLookup {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Underlying failure.
        reason: String,
    },

    /// Currency or rate data could not be read or is invalid.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Builds a `RateLookup` error for the given pair.
    pub fn rate_lookup(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::RateLookup {
            from: from.into(),
            to: to.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::RateLookup { .. } => "RATE_LOOKUP_FAILED",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Only rate lookups may be retried; everything else is a caller error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLookup { .. })
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
