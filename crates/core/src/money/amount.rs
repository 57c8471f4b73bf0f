//! Conversion of caller input into decimal amounts.

use std::str::FromStr;

use moneta_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Anything that can be read as a decimal amount: decimals, integers,
/// floats and numeric strings.
pub trait IntoAmount {
    /// Converts `self` into a `Decimal`, or `InvalidArgument` if it is not a
    /// finite number.
    fn into_amount(self) -> MoneyResult<Decimal>;
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

macro_rules! impl_into_amount_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_amount_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoAmount for f64 {
    fn into_amount(self) -> MoneyResult<Decimal> {
        Decimal::try_from(self)
            .map_err(|_| MoneyError::InvalidArgument(format!("{self} is not a valid amount")))
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> MoneyResult<Decimal> {
        Decimal::try_from(self)
            .map_err(|_| MoneyError::InvalidArgument(format!("{self} is not a valid amount")))
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> MoneyResult<Decimal> {
        let text = self.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| MoneyError::InvalidArgument(format!("'{self}' is not a valid amount")))
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> MoneyResult<Decimal> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> MoneyResult<Decimal> {
        self.as_str().into_amount()
    }
}
