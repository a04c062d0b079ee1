//! Core data models for the overtime control engine.
//!
//! This module contains the form, input and report types shared by the
//! parser, the calculator and the HTTP API.

mod earnings_form;
mod earnings_input;
mod earnings_report;

pub use earnings_form::{EarningsField, EarningsForm};
pub use earnings_input::EarningsInput;
pub use earnings_report::{
    AuditStep, AuditTrace, EarningsBreakdown, EarningsDisplay, EarningsReport,
};
