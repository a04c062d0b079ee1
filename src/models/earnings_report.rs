//! Earnings report models.
//!
//! This module contains the [`EarningsReport`] type and its associated
//! structures that capture every output of an earnings calculation: the
//! numeric breakdown, display strings, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EarningsInput;

/// The computed figures of an earnings calculation.
///
/// # Example
///
/// ```
/// use overtime_control::models::EarningsBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = EarningsBreakdown {
///     base_earnings: Decimal::from(1600),
///     overtime_rate: Decimal::from(15),
///     overtime_earnings: Decimal::from(75),
///     total_earnings: Decimal::from(1675),
///     night_additional: Decimal::ZERO,
/// };
/// assert_eq!(
///     breakdown.total_earnings,
///     breakdown.base_earnings + breakdown.overtime_earnings
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Monthly pay excluding overtime.
    pub base_earnings: Decimal,
    /// Hourly rate including the overtime surcharge.
    pub overtime_rate: Decimal,
    /// Overtime hours paid at the overtime rate.
    pub overtime_earnings: Decimal,
    /// Base earnings plus overtime earnings.
    pub total_earnings: Decimal,
    /// Night additional, reported separately and not part of the total.
    pub night_additional: Decimal,
}

/// Display strings for every figure a form shows back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsDisplay {
    /// Days worked, as a plain number.
    pub days_worked_per_month: String,
    /// Hours worked per day, as a plain number.
    pub hours_worked_per_day: String,
    /// Ordinary hourly rate, as currency.
    pub earnings_per_hour: String,
    /// Overtime hourly rate, as currency.
    pub overtime_rate: String,
    /// Base earnings, as currency.
    pub base_earnings: String,
    /// Overtime earnings, as currency.
    pub overtime_earnings: String,
    /// Total earnings, as currency.
    pub total_earnings: String,
    /// Night additional, as currency.
    pub night_additional: String,
}

/// A single step in the audit trace recording a parse or calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the step.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use overtime_control::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of parse and calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of an earnings calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The parsed input values the figures were derived from.
    pub inputs: EarningsInput,
    /// The computed figures.
    pub breakdown: EarningsBreakdown,
    /// The computed figures formatted for display.
    pub display: EarningsDisplay,
    /// Record of every parse and calculation step.
    pub audit_trace: AuditTrace,
}
