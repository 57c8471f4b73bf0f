//! Currency validation, exchange rates and conversion.

pub mod exchange;
pub mod rates;
pub mod registry;

pub use exchange::Exchange;
pub use rates::{RateSource, RemoteLookup, StaticTable, pair_key};
pub use registry::CurrencyRegistry;
