//! Arithmetic, comparison and conversion for `Money`.
//!
//! Every operation that may cross currencies takes the `Exchange` to use;
//! none of them mutate their operands.

use std::cmp::Ordering;

use moneta_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::amount::IntoAmount;
use super::value::Money;
use crate::currency::Exchange;

/// Currency both operands are expressed in before they are compared.
pub const CANONICAL_CURRENCY: Currency = Currency::USD;

fn overflow(operation: &str) -> MoneyError {
    MoneyError::InvalidArgument(format!("amount overflow in {operation}"))
}

impl Money {
    /// Returns a new value expressed in `target`.
    ///
    /// The amount is exactly `exchange.convert(self, target)`.
    pub fn convert_to(&self, target: &str, exchange: &Exchange) -> MoneyResult<Money> {
        let amount = exchange.convert(self, target)?;
        let currency = exchange.resolve(target)?;
        Ok(Money::from_parts(amount, currency))
    }

    /// Orders two amounts by their value in [`CANONICAL_CURRENCY`].
    ///
    /// Both sides are always converted, even when they share a currency, so
    /// the canonical currency and both operand currencies must be registered.
    pub fn compare(&self, other: &Money, exchange: &Exchange) -> MoneyResult<Ordering> {
        let ours = exchange.convert(self, CANONICAL_CURRENCY.as_str())?;
        let theirs = exchange.convert(other, CANONICAL_CURRENCY.as_str())?;
        Ok(ours.cmp(&theirs))
    }

    /// Sums two amounts in this value's currency.
    ///
    /// `other` is converted first when its currency differs.
    pub fn add(&self, other: &Money, exchange: &Exchange) -> MoneyResult<Money> {
        let other = self.align(other, exchange)?;
        self.amount()
            .checked_add(other)
            .map(|amount| Money::from_parts(amount, *self.currency()))
            .ok_or_else(|| overflow("add"))
    }

    /// Subtracts `other` in this value's currency.
    ///
    /// `other` is converted first when its currency differs.
    pub fn subtract(&self, other: &Money, exchange: &Exchange) -> MoneyResult<Money> {
        let other = self.align(other, exchange)?;
        self.amount()
            .checked_sub(other)
            .map(|amount| Money::from_parts(amount, *self.currency()))
            .ok_or_else(|| overflow("subtract"))
    }

    /// Scales the amount by a plain number; the currency is unchanged.
    pub fn multiply(&self, factor: impl IntoAmount) -> MoneyResult<Money> {
        let factor = factor.into_amount()?;
        self.amount()
            .checked_mul(factor)
            .map(|amount| Money::from_parts(amount, *self.currency()))
            .ok_or_else(|| overflow("multiply"))
    }

    /// Divides the amount by a plain number; the currency is unchanged.
    ///
    /// Fails with `DivisionByZero` when `divisor` is zero.
    pub fn divide(&self, divisor: impl IntoAmount) -> MoneyResult<Money> {
        let divisor = divisor.into_amount()?;
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount()
            .checked_div(divisor)
            .map(|amount| Money::from_parts(amount, *self.currency()))
            .ok_or_else(|| overflow("divide"))
    }

    /// `other`'s amount expressed in this value's currency.
    fn align(&self, other: &Money, exchange: &Exchange) -> MoneyResult<Decimal> {
        if self.currency() == other.currency() {
            Ok(other.amount())
        } else {
            exchange.convert(other, self.currency().as_str())
        }
    }
}
