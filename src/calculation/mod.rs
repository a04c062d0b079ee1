//! Calculation logic for the overtime control engine.
//!
//! This module contains the earnings arithmetic: base monthly earnings,
//! the overtime-adjusted hourly rate, overtime and total earnings, and the
//! night additional. Every operation comes in a plain form returning the
//! number and an audited `calculate_*` form that also records an
//! [`AuditStep`](crate::models::AuditStep). [`calculate_form`] runs the
//! whole pass from raw field text.

mod base_earnings;
mod night_additional;
mod overtime_rate;
mod report;
mod total_earnings;

pub use base_earnings::{BaseEarningsResult, base_earnings, calculate_base_earnings};
pub use night_additional::{NightAdditionalResult, calculate_night_additional, night_additional};
pub use overtime_rate::{
    OvertimeRateResult, calculate_overtime_rate, overtime_rate, surcharge_multiplier,
};
pub use report::{
    BreakdownResult, ENGINE_VERSION, calculate_breakdown, calculate_earnings, calculate_form,
    display_figures,
};
pub use total_earnings::{
    OvertimeEarningsResult, TotalEarningsResult, calculate_overtime_earnings,
    calculate_total_earnings, overtime_earnings, total_earnings,
};
