//! Display formatting for computed figures.

mod currency;

pub use currency::{CurrencyFormat, SymbolPosition, format_currency, format_quantity};
