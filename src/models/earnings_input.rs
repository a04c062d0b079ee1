//! Parsed numeric input for an earnings calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The numeric values behind an [`EarningsForm`](super::EarningsForm).
///
/// Every field is a plain number; unparseable text has already been
/// replaced by zero. Negative values are allowed and flow through the
/// arithmetic unchanged.
///
/// # Example
///
/// ```
/// use overtime_control::models::EarningsInput;
/// use rust_decimal::Decimal;
///
/// let input = EarningsInput {
///     earnings_per_hour: Decimal::from(10),
///     hours_worked_per_day: Decimal::from(8),
///     days_worked_per_month: Decimal::from(20),
///     overtime_hours_in_month: Decimal::from(5),
///     overtime_surcharge_percent: Decimal::from(50),
///     night_surcharge_percent: Decimal::ZERO,
/// };
/// assert_eq!(input.earnings_per_hour, Decimal::from(10));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsInput {
    /// Ordinary hourly rate.
    pub earnings_per_hour: Decimal,
    /// Ordinary hours worked per day.
    pub hours_worked_per_day: Decimal,
    /// Days worked in the month. Fractional days are allowed.
    pub days_worked_per_month: Decimal,
    /// Overtime hours worked in the month.
    pub overtime_hours_in_month: Decimal,
    /// Overtime surcharge as a percentage (50 means +50%).
    pub overtime_surcharge_percent: Decimal,
    /// Night additional as a percentage of base earnings.
    pub night_surcharge_percent: Decimal,
}
