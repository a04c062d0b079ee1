//! Currency display formatting.
//!
//! Turns computed amounts into strings such as `$1,675.00`. The format is
//! configuration driven; the defaults match US dollar conventions.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$1,675.00`
    #[default]
    Prefix,
    /// `1.675,00 €`
    Suffix,
}

/// How amounts are rendered for display.
///
/// # Example
///
/// ```
/// use overtime_control::formatting::{CurrencyFormat, format_currency};
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format_currency(Decimal::from(1675), &format), "$1,675.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// The currency symbol, e.g. `$` or `R$`.
    pub symbol: String,
    /// Where the symbol is placed.
    pub symbol_position: SymbolPosition,
    /// Number of digits after the decimal separator.
    pub decimal_places: u32,
    /// Separator between groups of three integer digits. May be empty.
    pub thousands_separator: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            decimal_places: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

/// Formats `amount` as currency.
///
/// The amount is rounded to `decimal_places` with midpoints going to the
/// nearest even digit. Negative amounts get a leading `-`; an amount that
/// rounds to zero is shown unsigned.
///
/// # Examples
///
/// ```
/// use overtime_control::formatting::{CurrencyFormat, SymbolPosition, format_currency};
/// use rust_decimal::Decimal;
///
/// let brl = CurrencyFormat {
///     symbol: "R$".to_string(),
///     symbol_position: SymbolPosition::Prefix,
///     decimal_places: 2,
///     thousands_separator: ".".to_string(),
///     decimal_separator: ",".to_string(),
/// };
/// assert_eq!(format_currency(Decimal::new(-123456, 1), &brl), "-R$12.345,60");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let places = format.decimal_places;
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut number = group_thousands(integer, &format.thousands_separator);
    if places > 0 {
        number.push_str(&format.decimal_separator);
        number.push_str(fraction);
        for _ in fraction.len()..places as usize {
            number.push('0');
        }
    }

    let sign = if negative { "-" } else { "" };
    match format.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{}{number}", format.symbol),
        SymbolPosition::Suffix => format!("{sign}{number} {}", format.symbol),
    }
}

/// Formats a non-monetary figure (days, hours) without trailing zeros.
///
/// # Examples
///
/// ```
/// use overtime_control::formatting::format_quantity;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_quantity(Decimal::new(2050, 2)), "20.5");
/// ```
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
