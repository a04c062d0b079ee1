//! Overtime Control Engine
//!
//! This crate computes an employee's monthly earnings from the raw text of
//! an earnings form: base pay from hourly rate, hours per day and days
//! worked, plus overtime hours paid at a surcharged rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod parsing;
