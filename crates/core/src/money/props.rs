//! Property-based tests for money operations.
//!
//! - Formatting always shows two fractional digits and the code
//! - Conversion agrees with the exchange and is the identity on itself
//! - Cross-currency arithmetic converts the right operand first
//! - Scalar arithmetic preserves currency

use std::cmp::Ordering;

use moneta_shared::{Currency, MoneyError};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::value::Money;
use crate::currency::{CurrencyRegistry, Exchange, StaticTable};

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick one of the registered currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
    ]
}

fn exchange_with(eur_usd: Decimal, usd_eur: Decimal) -> Exchange {
    let registry = CurrencyRegistry::from_codes(["USD", "EUR", "GBP"]).unwrap();
    let table = StaticTable::new()
        .with_rate(Currency::EUR, Currency::USD, eur_usd)
        .unwrap()
        .with_rate(Currency::USD, Currency::EUR, usd_eur)
        .unwrap();
    Exchange::new(registry, table)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and currency, format() SHALL end with exactly two
    /// fractional digits followed by a space and the code.
    #[test]
    fn prop_format_two_decimals_and_code(
        amount in amount(),
        currency in currency(),
    ) {
        let rendered = Money::from_parts(amount, currency).format();
        let (number, code) = rendered.split_once(' ').unwrap();

        prop_assert_eq!(code, currency.as_str());
        let (_, fraction) = number.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    /// *For any* amount and currency, converting into the same currency
    /// SHALL return an equal value.
    #[test]
    fn prop_self_conversion_is_identity(
        amount in amount(),
        currency in currency(),
        rate in positive_rate(),
    ) {
        let exchange = exchange_with(rate, rate);
        let money = Money::from_parts(amount, currency);
        let converted = money.convert_to(currency.as_str(), &exchange).unwrap();
        prop_assert_eq!(converted, money);
    }

    /// *For any* amount and rate, convert_to() SHALL carry exactly the amount
    /// Exchange::convert() returns.
    #[test]
    fn prop_convert_to_matches_exchange(
        amount in amount(),
        rate in positive_rate(),
    ) {
        let exchange = exchange_with(rate, Decimal::ONE);
        let money = Money::from_parts(amount, Currency::EUR);

        let converted = money.convert_to("USD", &exchange).unwrap();
        prop_assert_eq!(converted.amount(), exchange.convert(&money, "USD").unwrap());
        prop_assert_eq!(converted.amount(), amount * rate);
        prop_assert_eq!(converted.currency(), &Currency::USD);
    }

    /// *For any* operands, add() SHALL be left amount plus right amount
    /// converted into the left currency, tagged with the left currency.
    #[test]
    fn prop_add_converts_right_operand(
        left in amount(),
        right in amount(),
        rate in positive_rate(),
    ) {
        let exchange = exchange_with(rate, Decimal::ONE);
        let sum = Money::from_parts(left, Currency::USD)
            .add(&Money::from_parts(right, Currency::EUR), &exchange)
            .unwrap();

        prop_assert_eq!(sum.currency(), &Currency::USD);
        prop_assert_eq!(sum.amount(), left + right * rate);
    }

    /// *For any* operands in one currency, subtracting then adding the same
    /// value SHALL give back the original.
    #[test]
    fn prop_subtract_then_add_round_trips(
        left in amount(),
        right in amount(),
        currency in currency(),
    ) {
        let exchange = exchange_with(Decimal::ONE, Decimal::ONE);
        let left = Money::from_parts(left, currency);
        let right = Money::from_parts(right, currency);

        let back = left
            .subtract(&right, &exchange)
            .and_then(|difference| difference.add(&right, &exchange))
            .unwrap();
        prop_assert_eq!(back, left);
    }

    /// *For any* amount and non-zero integer, multiply() then divide() SHALL
    /// give back the original amount in the same currency.
    #[test]
    fn prop_scalar_ops_preserve_currency(
        amount in amount(),
        currency in currency(),
        factor in prop_oneof![-1000i64..-1, 1i64..1000],
    ) {
        let money = Money::from_parts(amount, currency);
        let scaled = money.multiply(factor).unwrap();
        prop_assert_eq!(scaled.currency(), &currency);

        let back = scaled.divide(factor).unwrap();
        prop_assert_eq!(back, money);
        prop_assert_eq!(money.divide(0), Err(MoneyError::DivisionByZero));
    }

    /// *For any* two USD amounts, compare() SHALL agree with comparing the
    /// raw amounts.
    #[test]
    fn prop_compare_usd_matches_amounts(
        left in amount(),
        right in amount(),
    ) {
        let exchange = exchange_with(Decimal::ONE, Decimal::ONE);
        let ordering = Money::from_parts(left, Currency::USD)
            .compare(&Money::from_parts(right, Currency::USD), &exchange)
            .unwrap();
        prop_assert_eq!(ordering, left.cmp(&right));
    }

    /// *For any* EUR→USD rate above one, equal nominal amounts SHALL order
    /// USD below EUR.
    #[test]
    fn prop_stronger_currency_orders_higher(
        nominal in 1i64..1_000_000,
        rate in (10_001i64..100_000_000).prop_map(|v| Decimal::new(v, 4)),
    ) {
        let exchange = exchange_with(rate, Decimal::ONE);
        let ordering = Money::from_parts(Decimal::from(nominal), Currency::USD)
            .compare(&Money::from_parts(Decimal::from(nominal), Currency::EUR), &exchange)
            .unwrap();
        prop_assert_eq!(ordering, Ordering::Less);
    }
}
