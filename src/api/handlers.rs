//! HTTP request handlers for the overtime control API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_form;
use crate::models::EarningsForm;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the raw form fields and returns the earnings report. Field text
/// that is not a number is treated as zero, so only a body that is not a
/// JSON form is rejected.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EarningsForm>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(&correlation_id, rejection))
                .into_response();
        }
    };

    let report = calculate_form(&form, state.config().currency());

    info!(
        correlation_id = %correlation_id,
        calculation_id = %report.calculation_id,
        total_earnings = %report.breakdown.total_earnings,
        duration_us = report.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

fn rejection_error(correlation_id: &Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::with_details(
                "MALFORMED_JSON",
                "Request body must be a JSON object of form fields",
                body_text,
            )
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            )
        }
        other => {
            warn!(
                correlation_id = %correlation_id,
                error = %other,
                "Request body rejected"
            );
            ApiError::malformed_json("Failed to parse request body")
        }
    }
}
