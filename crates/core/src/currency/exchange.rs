//! Currency exchange: validation plus rate lookup plus amount scaling.

use std::fmt;
use std::sync::Arc;

use moneta_shared::{Currency, MonetaConfig, MoneyError, MoneyResult, RateSourceKind};
use rust_decimal::Decimal;
use tracing::debug;

use super::rates::{RateSource, RemoteLookup, StaticTable};
use super::registry::CurrencyRegistry;
use crate::money::Money;

/// Converts amounts between registered currencies.
///
/// Holds no state beyond its two collaborators, both shared via `Arc`, so
/// clones are cheap and can be handed to other threads.
#[derive(Clone)]
pub struct Exchange {
    registry: Arc<CurrencyRegistry>,
    rates: Arc<dyn RateSource>,
}

impl Exchange {
    /// Creates an exchange over `registry` using `rates` for multipliers.
    pub fn new(registry: CurrencyRegistry, rates: impl RateSource + 'static) -> Self {
        Self::from_shared(Arc::new(registry), Arc::new(rates))
    }

    /// Creates an exchange from already shared collaborators.
    pub fn from_shared(registry: Arc<CurrencyRegistry>, rates: Arc<dyn RateSource>) -> Self {
        Self { registry, rates }
    }

    /// Loads the currency registry and the configured rate source.
    pub fn from_config(config: &MonetaConfig) -> MoneyResult<Self> {
        let registry = CurrencyRegistry::from_json_file(&config.currencies_path)?;

        let exchange = match config.rates.source {
            RateSourceKind::Static => {
                let table = StaticTable::from_json_file(config.rates.require_table_path()?)?;
                Self::new(registry, table)
            }
            RateSourceKind::Remote => Self::new(registry, RemoteLookup::from_config(&config.rates)?),
        };

        debug!(rates = exchange.rates.name(), "Exchange configured");
        Ok(exchange)
    }

    /// The registry this exchange validates against.
    #[must_use]
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Returns `money`'s amount expressed in `target`.
    ///
    /// The source currency is validated before the target, so when both are
    /// unknown the error names the source. Converting into the same currency
    /// returns the amount unchanged without consulting the rate source.
    /// An amount too large to scale fails with `InvalidArgument`.
    pub fn convert(&self, money: &Money, target: &str) -> MoneyResult<Decimal> {
        let source = money.currency();
        self.ensure_registered(source)?;
        let target = self.resolve(target)?;

        if *source == target {
            return Ok(money.amount());
        }

        let rate = self.rates.rate(source, &target)?;
        let converted = money
            .amount()
            .checked_mul(rate)
            .ok_or_else(|| MoneyError::InvalidArgument("amount overflow in convert".to_string()))?;
        debug!(
            from = %source,
            to = %target,
            %rate,
            amount = %money.amount(),
            %converted,
            rates = self.rates.name(),
            "Converted amount"
        );
        Ok(converted)
    }

    /// Returns the validated multiplier from `from` to `to`.
    pub fn rate(&self, from: &str, to: &str) -> MoneyResult<Decimal> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        if from == to {
            return Ok(Decimal::ONE);
        }
        self.rates.rate(&from, &to)
    }

    /// Parses `code` and checks it against the registry.
    pub fn resolve(&self, code: &str) -> MoneyResult<Currency> {
        let currency = Currency::parse(code).map_err(|err| match err {
            // A blank target names no currency at all.
            MoneyError::InvalidArgument(_) => MoneyError::InvalidCurrency(code.to_string()),
            other => other,
        })?;
        self.ensure_registered(&currency)?;
        Ok(currency)
    }

    fn ensure_registered(&self, currency: &Currency) -> MoneyResult<()> {
        if self.registry.contains(currency) {
            Ok(())
        } else {
            Err(MoneyError::InvalidCurrency(currency.to_string()))
        }
    }
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("registry", &self.registry)
            .field("rates", &self.rates.name())
            .finish()
    }
}
