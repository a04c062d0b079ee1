//! The full earnings calculation pass.
//!
//! Runs every calculation in order, collects the audit steps and builds the
//! [`EarningsReport`]. Each call recomputes everything from its inputs;
//! nothing is cached between calls.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::formatting::{CurrencyFormat, format_currency, format_quantity};
use crate::models::{
    AuditStep, AuditTrace, EarningsBreakdown, EarningsDisplay, EarningsForm, EarningsInput,
    EarningsReport,
};
use crate::parsing::parse_form;

use super::base_earnings::calculate_base_earnings;
use super::night_additional::calculate_night_additional;
use super::overtime_rate::calculate_overtime_rate;
use super::total_earnings::{calculate_overtime_earnings, calculate_total_earnings};

/// The engine version stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The breakdown plus the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    /// The computed figures.
    pub breakdown: EarningsBreakdown,
    /// One audit step per calculation, in execution order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes every figure for `input`, numbering audit steps from `first_step`.
pub fn calculate_breakdown(input: &EarningsInput, first_step: u32) -> BreakdownResult {
    let mut step_number = first_step;

    let base = calculate_base_earnings(input, step_number);
    step_number += 1;

    let rate = calculate_overtime_rate(input, step_number);
    step_number += 1;

    let overtime = calculate_overtime_earnings(rate.overtime_rate, input, step_number);
    step_number += 1;

    let total = calculate_total_earnings(base.base_earnings, overtime.overtime_earnings, step_number);
    step_number += 1;

    let night = calculate_night_additional(base.base_earnings, input, step_number);

    let breakdown = EarningsBreakdown {
        base_earnings: base.base_earnings,
        overtime_rate: rate.overtime_rate,
        overtime_earnings: overtime.overtime_earnings,
        total_earnings: total.total_earnings,
        night_additional: night.night_additional,
    };

    BreakdownResult {
        breakdown,
        audit_steps: vec![
            base.audit_step,
            rate.audit_step,
            overtime.audit_step,
            total.audit_step,
            night.audit_step,
        ],
    }
}

/// Formats the figures a form shows back to the user.
pub fn display_figures(
    input: &EarningsInput,
    breakdown: &EarningsBreakdown,
    currency: &CurrencyFormat,
) -> EarningsDisplay {
    EarningsDisplay {
        days_worked_per_month: format_quantity(input.days_worked_per_month),
        hours_worked_per_day: format_quantity(input.hours_worked_per_day),
        earnings_per_hour: format_currency(input.earnings_per_hour, currency),
        overtime_rate: format_currency(breakdown.overtime_rate, currency),
        base_earnings: format_currency(breakdown.base_earnings, currency),
        overtime_earnings: format_currency(breakdown.overtime_earnings, currency),
        total_earnings: format_currency(breakdown.total_earnings, currency),
        night_additional: format_currency(breakdown.night_additional, currency),
    }
}

/// Calculates the full report for already parsed input.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::calculate_earnings;
/// use overtime_control::formatting::CurrencyFormat;
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
///
/// let report = calculate_earnings(&input, &CurrencyFormat::default());
/// assert_eq!(report.breakdown.total_earnings, Decimal::from(1675));
/// assert_eq!(report.display.total_earnings, "$1,675.00");
/// ```
pub fn calculate_earnings(input: &EarningsInput, currency: &CurrencyFormat) -> EarningsReport {
    let start_time = Instant::now();
    let result = calculate_breakdown(input, 1);
    build_report(*input, result, Vec::new(), currency, start_time)
}

/// Parses `form` and calculates the full report.
///
/// The audit trace starts with one parse step per field, followed by the
/// calculation steps.
///
/// # Examples
///
/// ```
/// use overtime_control::calculation::calculate_form;
/// use overtime_control::formatting::CurrencyFormat;
/// use overtime_control::models::EarningsForm;
/// use rust_decimal::Decimal;
///
/// let report = calculate_form(&EarningsForm::default(), &CurrencyFormat::default());
/// assert_eq!(report.breakdown.total_earnings, Decimal::ZERO);
/// ```
pub fn calculate_form(form: &EarningsForm, currency: &CurrencyFormat) -> EarningsReport {
    let start_time = Instant::now();
    let parsed = parse_form(form, 1);
    let next_step = parsed.audit_steps.len() as u32 + 1;
    let result = calculate_breakdown(&parsed.input, next_step);
    build_report(parsed.input, result, parsed.audit_steps, currency, start_time)
}

fn build_report(
    input: EarningsInput,
    result: BreakdownResult,
    mut steps: Vec<AuditStep>,
    currency: &CurrencyFormat,
    start_time: Instant,
) -> EarningsReport {
    let display = display_figures(&input, &result.breakdown, currency);
    steps.extend(result.audit_steps);

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        total_earnings = %result.breakdown.total_earnings,
        steps = steps.len(),
        duration_us,
        "Earnings calculated"
    );

    EarningsReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        inputs: input,
        breakdown: result.breakdown,
        display,
        audit_trace: AuditTrace { steps, duration_us },
    }
}
