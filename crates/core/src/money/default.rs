//! Scoped default currency.
//!
//! The default lives in thread-local storage and is only ever changed for
//! the duration of a closure, so concurrent callers on other threads never
//! observe each other's defaults.

use std::cell::Cell;

use moneta_shared::Currency;

thread_local! {
    static DEFAULT_CURRENCY: Cell<Option<Currency>> = const { Cell::new(None) };
}

/// Restores the previous default when dropped, including during unwinding.
struct RestoreDefault(Option<Currency>);

impl Drop for RestoreDefault {
    fn drop(&mut self) {
        DEFAULT_CURRENCY.with(|default| default.set(self.0));
    }
}

/// Returns the default currency active on this thread, if any.
#[must_use]
pub fn default_currency() -> Option<Currency> {
    DEFAULT_CURRENCY.with(Cell::get)
}

/// Runs `block` with `currency` as this thread's default currency.
///
/// The previous default is restored however `block` exits: normal return,
/// an `Err` result, or a panic.
pub fn using_default_currency<R>(currency: Currency, block: impl FnOnce() -> R) -> R {
    let _restore = RestoreDefault(DEFAULT_CURRENCY.with(|default| default.replace(Some(currency))));
    block()
}
