//! Core money logic for Moneta.
//!
//! This crate contains the money value type and currency exchange with ZERO
//! storage or web-server dependencies.
//!
//! # Modules
//!
//! - `money` - The `Money` value type, arithmetic, comparison and formatting
//! - `currency` - Currency registry, rate sources and the `Exchange`
//!
//! # Example
//!
//! ```
//! use moneta_core::{CurrencyRegistry, Exchange, Money, StaticTable};
//! use moneta_shared::Currency;
//! use rust_decimal::Decimal;
//!
//! let registry = CurrencyRegistry::from_codes(["USD", "EUR"]).unwrap();
//! let rates = StaticTable::new()
//!     .with_rate(Currency::EUR, Currency::USD, Decimal::new(13, 1))
//!     .unwrap();
//! let exchange = Exchange::new(registry, rates);
//!
//! let total = Money::from_usd(10)
//!     .unwrap()
//!     .add(&Money::from_eur(10).unwrap(), &exchange)
//!     .unwrap();
//! assert_eq!(total.to_string(), "23.00 USD");
//! ```

pub mod currency;
pub mod money;

pub use currency::{CurrencyRegistry, Exchange, RateSource, RemoteLookup, StaticTable};
pub use money::{CANONICAL_CURRENCY, IntoAmount, Money};
pub use moneta_shared::{Currency, MonetaConfig, MoneyError, MoneyResult};
