//! Night additional calculation.
//!
//! The night additional is a percentage of base earnings. It is reported
//! as its own figure and is not folded into total earnings.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EarningsInput};

/// The result of calculating the night additional, including the audit step.
#[derive(Debug, Clone)]
pub struct NightAdditionalResult {
    /// The night additional amount.
    pub night_additional: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns `night_surcharge_percent / 100 × base_earnings`.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::night_additional;
/// use rust_decimal::Decimal;
///
/// assert_eq!(night_additional(Decimal::from(1600), Decimal::from(25)), Decimal::from(400));
/// ```
pub fn night_additional(base_earnings: Decimal, night_surcharge_percent: Decimal) -> Decimal {
    (night_surcharge_percent / Decimal::ONE_HUNDRED).saturating_mul(base_earnings)
}

/// Calculates the night additional on `base_earnings` and records an audit step.
pub fn calculate_night_additional(
    base_earnings: Decimal,
    input: &EarningsInput,
    step_number: u32,
) -> NightAdditionalResult {
    let percent = input.night_surcharge_percent;
    let result = night_additional(base_earnings, percent);

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_additional".to_string(),
        rule_name: "Night Additional".to_string(),
        input: serde_json::json!({
            "base_earnings": base_earnings.normalize().to_string(),
            "night_surcharge_percent": percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "night_additional": result.normalize().to_string(),
            "included_in_total": false
        }),
        reasoning: format!(
            "{}% of {} = {}",
            percent.normalize(),
            base_earnings.normalize(),
            result.normalize()
        ),
    };

    NightAdditionalResult {
        night_additional: result,
        audit_step,
    }
}
