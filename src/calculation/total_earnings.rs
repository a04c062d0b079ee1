//! Overtime earnings and total monthly earnings.
//!
//! Overtime hours are paid at the overtime-adjusted rate. The total is the
//! base earnings plus those overtime earnings.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EarningsInput};

use super::base_earnings::base_earnings;
use super::overtime_rate::overtime_rate;

/// The result of calculating overtime earnings, including the audit step.
#[derive(Debug, Clone)]
pub struct OvertimeEarningsResult {
    /// Overtime hours paid at the overtime rate.
    pub overtime_earnings: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of calculating total earnings, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalEarningsResult {
    /// Base earnings plus overtime earnings.
    pub total_earnings: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns `overtime_rate × overtime_hours`.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::overtime_earnings;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_earnings(Decimal::from(15), Decimal::from(5)), Decimal::from(75));
/// ```
pub fn overtime_earnings(overtime_rate: Decimal, overtime_hours: Decimal) -> Decimal {
    overtime_rate.saturating_mul(overtime_hours)
}

/// Returns base earnings plus overtime hours paid at the surcharged rate.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::total_earnings;
/// use rust_decimal::Decimal;
///
/// let total = total_earnings(
///     Decimal::from(10),
///     Decimal::from(8),
///     Decimal::from(20),
///     Decimal::from(5),
///     Decimal::from(50),
/// );
/// assert_eq!(total, Decimal::from(1675));
/// ```
pub fn total_earnings(
    earnings_per_hour: Decimal,
    hours_worked_per_day: Decimal,
    days_worked_per_month: Decimal,
    overtime_hours: Decimal,
    surcharge_percent: Decimal,
) -> Decimal {
    let base = base_earnings(earnings_per_hour, hours_worked_per_day, days_worked_per_month);
    let rate = overtime_rate(earnings_per_hour, surcharge_percent);
    base.saturating_add(overtime_earnings(rate, overtime_hours))
}

/// Calculates overtime earnings from an already computed overtime rate.
pub fn calculate_overtime_earnings(
    overtime_rate: Decimal,
    input: &EarningsInput,
    step_number: u32,
) -> OvertimeEarningsResult {
    let result = overtime_earnings(overtime_rate, input.overtime_hours_in_month);

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_earnings".to_string(),
        rule_name: "Overtime Earnings".to_string(),
        input: serde_json::json!({
            "overtime_rate": overtime_rate.normalize().to_string(),
            "overtime_hours_in_month": input.overtime_hours_in_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_earnings": result.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {}h = {}",
            overtime_rate.normalize(),
            input.overtime_hours_in_month.normalize(),
            result.normalize()
        ),
    };

    OvertimeEarningsResult {
        overtime_earnings: result,
        audit_step,
    }
}

/// Combines base and overtime earnings into the monthly total.
pub fn calculate_total_earnings(
    base_earnings: Decimal,
    overtime_earnings: Decimal,
    step_number: u32,
) -> TotalEarningsResult {
    let total = base_earnings.saturating_add(overtime_earnings);

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_earnings".to_string(),
        rule_name: "Total Monthly Earnings".to_string(),
        input: serde_json::json!({
            "base_earnings": base_earnings.normalize().to_string(),
            "overtime_earnings": overtime_earnings.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_earnings": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            base_earnings.normalize(),
            overtime_earnings.normalize(),
            total.normalize()
        ),
    };

    TotalEarningsResult {
        total_earnings: total,
        audit_step,
    }
}
