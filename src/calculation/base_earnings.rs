//! Base monthly earnings calculation.
//!
//! Base earnings are the ordinary pay for the month, before any overtime:
//! hourly rate times hours per day times days worked.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EarningsInput};

/// The result of calculating base earnings, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseEarningsResult {
    /// Monthly earnings excluding overtime.
    pub base_earnings: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns `earnings_per_hour × hours_worked_per_day × days_worked_per_month`.
///
/// Negative inputs are not rejected and produce a negative result. The
/// product saturates at the `Decimal` bounds.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::base_earnings;
/// use rust_decimal::Decimal;
///
/// let base = base_earnings(Decimal::from(10), Decimal::from(8), Decimal::from(20));
/// assert_eq!(base, Decimal::from(1600));
/// ```
pub fn base_earnings(
    earnings_per_hour: Decimal,
    hours_worked_per_day: Decimal,
    days_worked_per_month: Decimal,
) -> Decimal {
    earnings_per_hour
        .saturating_mul(hours_worked_per_day)
        .saturating_mul(days_worked_per_month)
}

/// Calculates base earnings for `input` and records an audit step.
pub fn calculate_base_earnings(input: &EarningsInput, step_number: u32) -> BaseEarningsResult {
    let result = base_earnings(
        input.earnings_per_hour,
        input.hours_worked_per_day,
        input.days_worked_per_month,
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_earnings".to_string(),
        rule_name: "Base Monthly Earnings".to_string(),
        input: serde_json::json!({
            "earnings_per_hour": input.earnings_per_hour.normalize().to_string(),
            "hours_worked_per_day": input.hours_worked_per_day.normalize().to_string(),
            "days_worked_per_month": input.days_worked_per_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_earnings": result.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {}h x {} days = {}",
            input.earnings_per_hour.normalize(),
            input.hours_worked_per_day.normalize(),
            input.days_worked_per_month.normalize(),
            result.normalize()
        ),
    };

    BaseEarningsResult {
        base_earnings: result,
        audit_step,
    }
}
