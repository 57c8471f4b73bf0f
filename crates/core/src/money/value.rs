//! The `Money` value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end.

use std::fmt;

use moneta_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::amount::IntoAmount;
use super::default::default_currency;

/// Fractional digits shown by [`Money::format`].
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// An amount of money in a given currency.
///
/// Immutable: arithmetic and conversion always return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates money from any numeric or numeric-string amount.
    ///
    /// Fails with `InvalidArgument` if the currency is blank or the amount
    /// cannot be read as a decimal, and with `InvalidCurrency` if the code is
    /// not three ASCII letters. The code is uppercased, so `"usd"` is stored
    /// as `USD`. Registry membership is only checked once an `Exchange` is
    /// involved.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let money = Money::new("10.5", "usd").unwrap();
    /// assert_eq!(money.to_string(), "10.50 USD");
    /// ```
    pub fn new(amount: impl IntoAmount, currency: &str) -> MoneyResult<Self> {
        let currency = Currency::parse(currency)?;
        Ok(Self::from_parts(amount.into_amount()?, currency))
    }

    /// Creates money in this thread's scoped default currency.
    ///
    /// See [`Money::using_default_currency`].
    pub fn with_default_currency(amount: impl IntoAmount) -> MoneyResult<Self> {
        let currency = default_currency()
            .ok_or_else(|| MoneyError::InvalidArgument("No currency given".to_string()))?;
        Ok(Self::from_parts(amount.into_amount()?, currency))
    }

    /// Creates money from an already validated amount and currency.
    #[must_use]
    pub const fn from_parts(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// US Dollars.
    pub fn from_usd(amount: impl IntoAmount) -> MoneyResult<Self> {
        Ok(Self::from_parts(amount.into_amount()?, Currency::USD))
    }

    /// Euros.
    pub fn from_eur(amount: impl IntoAmount) -> MoneyResult<Self> {
        Ok(Self::from_parts(amount.into_amount()?, Currency::EUR))
    }

    /// Pounds sterling.
    pub fn from_gbp(amount: impl IntoAmount) -> MoneyResult<Self> {
        Ok(Self::from_parts(amount.into_amount()?, Currency::GBP))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_parts(Decimal::ZERO, currency)
    }

    /// Runs `block` with `currency` as the default for
    /// [`Money::with_default_currency`] on this thread, restoring the
    /// previous default afterwards even if `block` fails or panics.
    pub fn using_default_currency<R>(currency: Currency, block: impl FnOnce() -> R) -> R {
        super::default::using_default_currency(currency, block)
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_negative()
    }

    /// Renders the amount with two decimals and the code, e.g. `10.00 USD`.
    ///
    /// Rounds half to even for display only; the stored amount keeps its
    /// full precision.
    #[must_use]
    pub fn format(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        // Avoid "-0.00" for tiny negative amounts.
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        format!("{rounded:.2} {}", self.currency)
    }

    /// Debug-style rendering, e.g. `#<Money 10.00 USD>`.
    #[must_use]
    pub fn inspect(&self) -> String {
        format!("#<Money {}>", self.format())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
