//! Text-to-number conversion for form fields.
//!
//! Parsing is total: any text that is not a plain decimal number becomes
//! zero. Nothing here ever returns an error to the caller.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::models::{AuditStep, EarningsField, EarningsForm, EarningsInput};

/// The most integer digits a `Decimal` can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// The most fractional digits a `Decimal` can hold.
const MAX_SCALE: i64 = 28;

/// The result of parsing a whole form, including one audit step per field.
#[derive(Debug, Clone)]
pub struct ParsedForm {
    /// The numeric values of every field.
    pub input: EarningsInput,
    /// One audit step per field, in [`EarningsField::ALL`] order.
    pub audit_steps: Vec<AuditStep>,
}

/// Parses field text into a number, or `None` when it is not one.
///
/// Leading and trailing spaces and ASCII control characters are ignored.
/// The accepted syntax is an optional sign, digits with at most one
/// decimal point, an optional exponent (`1.5e3`) and an optional type
/// suffix `f`, `F`, `d` or `D`. Values a `Decimal` cannot hold are
/// rejected; values too small to represent round to zero.
///
/// # Examples
///
/// ```
/// use overtime_control::parsing::parse_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_number(" 12.5 "), Some(Decimal::new(125, 1)));
/// assert_eq!(parse_number("2e3"), Some(Decimal::from(2000)));
/// assert_eq!(parse_number("10f"), Some(Decimal::from(10)));
/// assert_eq!(parse_number("12 hours"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let unsuffixed = trimmed
        .strip_suffix(['f', 'F', 'd', 'D'])
        .unwrap_or(trimmed);
    NumericLiteral::scan(unsuffixed)?.to_decimal()
}

/// Parses field text into a number, substituting zero when it is not one.
///
/// # Examples
///
/// ```
/// use overtime_control::parsing::parse_field;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_field("10"), Decimal::from(10));
/// assert_eq!(parse_field("-10"), Decimal::from(-10));
/// assert_eq!(parse_field("abc"), Decimal::ZERO);
/// assert_eq!(parse_field(""), Decimal::ZERO);
/// ```
pub fn parse_field(text: &str) -> Decimal {
    parse_number(text).unwrap_or(Decimal::ZERO)
}

/// Parses every field of `form`, recording one audit step per field.
///
/// Step numbers start at `first_step` and follow [`EarningsField::ALL`].
pub fn parse_form(form: &EarningsForm, first_step: u32) -> ParsedForm {
    let mut input = EarningsInput::default();
    let mut audit_steps = Vec::with_capacity(EarningsField::ALL.len());

    for (offset, field) in EarningsField::ALL.into_iter().enumerate() {
        let raw = form.value(field);
        let parsed = parse_number(raw);
        let value = parsed.unwrap_or(Decimal::ZERO);
        let defaulted = parsed.is_none();

        if defaulted && !raw.is_empty() {
            debug!(field = field.as_str(), raw = %raw, "Field is not a number, using 0");
        }

        match field {
            EarningsField::EarningsPerHour => input.earnings_per_hour = value,
            EarningsField::HoursWorkedPerDay => input.hours_worked_per_day = value,
            EarningsField::DaysWorkedPerMonth => input.days_worked_per_month = value,
            EarningsField::OvertimeHoursInMonth => input.overtime_hours_in_month = value,
            EarningsField::OvertimeSurchargePercent => input.overtime_surcharge_percent = value,
            EarningsField::NightSurchargePercent => input.night_surcharge_percent = value,
        }

        let reasoning = if defaulted {
            format!("'{}' is not a number, defaulted to 0", raw)
        } else {
            format!("'{}' parsed as {}", raw, value.normalize())
        };

        audit_steps.push(AuditStep {
            step_number: first_step + offset as u32,
            rule_id: format!("parse_{}", field.as_str()),
            rule_name: "Parse Field".to_string(),
            input: serde_json::json!({
                "field": field.as_str(),
                "raw": raw
            }),
            output: serde_json::json!({
                "value": value.normalize().to_string(),
                "defaulted": defaulted
            }),
            reasoning,
        });
    }

    ParsedForm { input, audit_steps }
}

/// A syntactically valid number as a digit string and a decimal exponent.
///
/// The value is `0.digits × 10^point`, so `12.5` is digits `125`, point 2.
struct NumericLiteral {
    negative: bool,
    digits: String,
    point: i64,
}

impl NumericLiteral {
    fn scan(text: &str) -> Option<Self> {
        let (number, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], Self::scan_exponent(&text[at + 1..])?),
            None => (text, 0),
        };

        let (negative, unsigned) = match number.as_bytes().first()? {
            b'-' => (true, &number[1..]),
            b'+' => (false, &number[1..]),
            _ => (false, number),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }

        let digits = format!("{integer}{fraction}");
        let leading_zeros = digits.len() - digits.trim_start_matches('0').len();
        let digits = digits.trim_matches('0').to_string();
        let point = (integer.len() as i64 - leading_zeros as i64).saturating_add(exponent);

        Some(Self {
            negative,
            digits,
            point,
        })
    }

    fn scan_exponent(text: &str) -> Option<i64> {
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Saturate absurdly long exponents; they over- or underflow anyway.
        Some(text.parse::<i64>().unwrap_or(if text.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }))
    }

    /// Places the decimal point in the digit string and converts once.
    fn to_decimal(&self) -> Option<Decimal> {
        if self.digits.is_empty() || self.point < -MAX_SCALE {
            return Some(Decimal::ZERO);
        }
        if self.point > MAX_INTEGER_DIGITS {
            return None;
        }

        let len = self.digits.len() as i64;
        let unsigned = if self.point >= len {
            format!("{}{}", self.digits, "0".repeat((self.point - len) as usize))
        } else if self.point > 0 {
            let (integer, fraction) = self.digits.split_at(self.point as usize);
            format!("{integer}.{fraction}")
        } else {
            format!("0.{}{}", "0".repeat(self.point.unsigned_abs() as usize), self.digits)
        };

        let value = Decimal::from_str(&unsigned).ok()?;
        Some(if self.negative { -value } else { value })
    }
}
