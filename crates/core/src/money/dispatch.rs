//! `to_<ccy>` conversion shorthands.
//!
//! `to_usd`, `to_eur` and `to_gbp` are plain methods. Any other code can be
//! reached by name through [`Money::convert_by_name`], which only accepts
//! names of the form `to_<code>` where `<code>` is registered.

use moneta_shared::{Currency, MoneyError, MoneyResult};

use super::value::Money;
use crate::currency::{CurrencyRegistry, Exchange};

/// Operator names every `Money` supports.
const ARITHMETIC_OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

/// Resolves a conversion name such as `to_eur` to its target currency.
///
/// Returns `None` unless the name is exactly `to_` followed by a registered
/// code (any case).
#[must_use]
pub fn conversion_target(operation: &str, registry: &CurrencyRegistry) -> Option<Currency> {
    let code = operation.strip_prefix("to_")?;
    if code.contains('_') {
        return None;
    }

    let currency = Currency::parse(code).ok()?;
    (currency.as_str().eq_ignore_ascii_case(code) && registry.contains(&currency)).then_some(currency)
}

impl Money {
    /// Converts to US Dollars.
    pub fn to_usd(self, exchange: &Exchange) -> MoneyResult<Money> {
        self.convert_to(Currency::USD.as_str(), exchange)
    }

    /// Converts to Euros.
    pub fn to_eur(self, exchange: &Exchange) -> MoneyResult<Money> {
        self.convert_to(Currency::EUR.as_str(), exchange)
    }

    /// Converts to pounds sterling.
    pub fn to_gbp(self, exchange: &Exchange) -> MoneyResult<Money> {
        self.convert_to(Currency::GBP.as_str(), exchange)
    }

    /// Runs the conversion named by `operation`, e.g. `"to_eur"`.
    ///
    /// Fails with `UnknownOperation` if the name is not a conversion to a
    /// currency registered with `exchange`.
    pub fn convert_by_name(&self, operation: &str, exchange: &Exchange) -> MoneyResult<Money> {
        let target = conversion_target(operation, exchange.registry())
            .ok_or_else(|| MoneyError::UnknownOperation(operation.to_string()))?;
        self.convert_to(target.as_str(), exchange)
    }

    /// Returns true if `operation` names an arithmetic operator or a
    /// conversion the registry can serve.
    #[must_use]
    pub fn responds_to(operation: &str, registry: &CurrencyRegistry) -> bool {
        ARITHMETIC_OPERATORS.contains(&operation) || conversion_target(operation, registry).is_some()
    }
}
