//! Overtime-adjusted hourly rate calculation.
//!
//! The overtime surcharge is a percentage uplift on the ordinary hourly
//! rate: a 50% surcharge turns $10/h into $15/h. The surcharge may be
//! zero, negative or above 100 and is never clamped.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EarningsInput};

/// The result of calculating the overtime rate, including the audit step.
#[derive(Debug, Clone)]
pub struct OvertimeRateResult {
    /// The hourly rate including the overtime surcharge.
    pub overtime_rate: Decimal,
    /// The multiplier applied to the ordinary rate.
    pub multiplier: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the rate multiplier for a surcharge percentage, `1 + percent / 100`.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::surcharge_multiplier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(surcharge_multiplier(Decimal::from(50)), Decimal::new(15, 1));
/// assert_eq!(surcharge_multiplier(Decimal::ZERO), Decimal::ONE);
/// ```
pub fn surcharge_multiplier(surcharge_percent: Decimal) -> Decimal {
    Decimal::ONE.saturating_add(surcharge_percent / Decimal::ONE_HUNDRED)
}

/// Returns `earnings_per_hour × (1 + surcharge_percent / 100)`.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::overtime_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_rate(Decimal::from(10), Decimal::from(50)), Decimal::from(15));
/// assert_eq!(overtime_rate(Decimal::from(10), Decimal::from(-10)), Decimal::from(9));
/// ```
pub fn overtime_rate(earnings_per_hour: Decimal, surcharge_percent: Decimal) -> Decimal {
    earnings_per_hour.saturating_mul(surcharge_multiplier(surcharge_percent))
}

/// Calculates the overtime rate for `input` and records an audit step.
pub fn calculate_overtime_rate(input: &EarningsInput, step_number: u32) -> OvertimeRateResult {
    let multiplier = surcharge_multiplier(input.overtime_surcharge_percent);
    let rate = input.earnings_per_hour.saturating_mul(multiplier);

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_rate".to_string(),
        rule_name: "Overtime-Adjusted Hourly Rate".to_string(),
        input: serde_json::json!({
            "earnings_per_hour": input.earnings_per_hour.normalize().to_string(),
            "overtime_surcharge_percent": input.overtime_surcharge_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_rate": rate.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} ({}% surcharge) = {}",
            input.earnings_per_hour.normalize(),
            multiplier.normalize(),
            input.overtime_surcharge_percent.normalize(),
            rate.normalize()
        ),
    };

    OvertimeRateResult {
        overtime_rate: rate,
        multiplier,
        audit_step,
    }
}
