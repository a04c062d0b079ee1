//! HTTP API module for the overtime control engine.
//!
//! This module provides the REST endpoint that stands in for the earnings
//! form: clients post the raw field text and get the computed report back.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
