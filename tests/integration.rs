//! Integration tests for the overtime control engine.
//!
//! This test suite drives the HTTP API end to end:
//! - The four reference scenarios (standard month, empty form, zero and
//!   negative surcharge)
//! - Unparseable and oddly formatted field text
//! - Numeric JSON fields
//! - Night additional reporting
//! - Configuration-driven currency display
//! - Error responses

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use overtime_control::api::{AppState, create_router};
use overtime_control::config::{CalculatorConfig, ConfigLoader};
use overtime_control::formatting::SymbolPosition;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config =
        ConfigLoader::load("./config/overtime_control.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal serialized as a JSON string.
fn field(json: &Value, section: &str, name: &str) -> Decimal {
    decimal(json[section][name].as_str().unwrap_or_else(|| {
        panic!("missing {}.{} in {}", section, name, json)
    }))
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(rate: &str, hours: &str, days: &str, overtime: &str, surcharge: &str) -> Value {
    json!({
        "earnings_per_hour": rate,
        "hours_worked_per_day": hours,
        "days_worked_per_month": days,
        "overtime_hours_in_month": overtime,
        "overtime_surcharge_percent": surcharge
    })
}

// =============================================================================
// Reference scenarios
// =============================================================================

/// Scenario 1: $10/h, 8h/day, 20 days, 5 overtime hours at +50%
#[tokio::test]
async fn test_scenario_1_standard_month() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "8", "20", "5", "50"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&json, "breakdown", "base_earnings"), decimal("1600"));
    assert_eq!(field(&json, "breakdown", "overtime_rate"), decimal("15"));
    assert_eq!(field(&json, "breakdown", "overtime_earnings"), decimal("75"));
    assert_eq!(field(&json, "breakdown", "total_earnings"), decimal("1675"));
    assert_eq!(json["display"]["total_earnings"], "$1,675.00");
}

/// Scenario 2: every field empty
#[tokio::test]
async fn test_scenario_2_all_fields_empty() {
    let (status, json) =
        post_calculate(create_router_for_test(), create_request("", "", "", "", "")).await;

    assert_eq!(status, StatusCode::OK);
    for name in [
        "base_earnings",
        "overtime_rate",
        "overtime_earnings",
        "total_earnings",
        "night_additional",
    ] {
        assert_eq!(field(&json, "breakdown", name), Decimal::ZERO, "{}", name);
    }
}

/// Scenario 2: every field unparseable
#[tokio::test]
async fn test_scenario_2_all_fields_unparseable() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        create_request("ten", "$8", "20 days", "five", "50%"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&json, "breakdown", "total_earnings"), Decimal::ZERO);

    let steps = json["audit_trace"]["steps"].as_array().unwrap();
    let defaulted = steps
        .iter()
        .filter(|s| s["output"]["defaulted"].as_bool() == Some(true))
        .count();
    assert_eq!(defaulted, 6);
}

/// Scenario 3: zero surcharge leaves the hourly rate unchanged
#[tokio::test]
async fn test_scenario_3_zero_surcharge() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request("28.54", "7.6", "20", "4", "0"),
    )
    .await;

    assert_eq!(field(&json, "breakdown", "overtime_rate"), decimal("28.54"));
    assert_eq!(
        field(&json, "breakdown", "overtime_earnings"),
        decimal("114.16")
    );
}

/// Scenario 4: negative surcharge reduces the rate without clamping
#[tokio::test]
async fn test_scenario_4_negative_surcharge() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "8", "20", "5", "-10"),
    )
    .await;

    assert_eq!(field(&json, "breakdown", "overtime_rate"), decimal("9"));
    assert_eq!(field(&json, "breakdown", "total_earnings"), decimal("1645"));
}

// =============================================================================
// Input handling
// =============================================================================

#[tokio::test]
async fn test_missing_fields_are_treated_as_empty() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        json!({ "earnings_per_hour": "10", "hours_worked_per_day": "8" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&json, "inputs", "days_worked_per_month"), Decimal::ZERO);
    assert_eq!(field(&json, "breakdown", "base_earnings"), Decimal::ZERO);
    assert_eq!(field(&json, "breakdown", "overtime_rate"), decimal("10"));
}

#[tokio::test]
async fn test_numeric_json_fields_are_accepted() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        json!({
            "earnings_per_hour": 10,
            "hours_worked_per_day": 8,
            "days_worked_per_month": 20,
            "overtime_hours_in_month": 5,
            "overtime_surcharge_percent": 50
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&json, "breakdown", "total_earnings"), decimal("1675"));
}

#[tokio::test]
async fn test_whitespace_and_exponent_text() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request(" 10 ", "8\n", "2e1", "5", "5e1"),
    )
    .await;

    assert_eq!(field(&json, "breakdown", "total_earnings"), decimal("1675"));
}

#[tokio::test]
async fn test_fractional_days_are_supported() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "8", "20.5", "0", "0"),
    )
    .await;

    assert_eq!(field(&json, "breakdown", "base_earnings"), decimal("1640"));
    assert_eq!(json["display"]["days_worked_per_month"], "20.5");
}

#[tokio::test]
async fn test_negative_hours_propagate() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "-8", "20", "0", "0"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&json, "breakdown", "base_earnings"), decimal("-1600"));
    assert_eq!(json["display"]["base_earnings"], "-$1,600.00");
}

// =============================================================================
// Night additional
// =============================================================================

#[tokio::test]
async fn test_night_additional_reported_separately() {
    let mut request = create_request("10", "8", "20", "5", "50");
    request["night_surcharge_percent"] = json!("20");

    let (_, json) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(field(&json, "breakdown", "night_additional"), decimal("320"));
    assert_eq!(field(&json, "breakdown", "total_earnings"), decimal("1675"));
    assert_eq!(json["display"]["night_additional"], "$320.00");
}

// =============================================================================
// Report shape
// =============================================================================

#[tokio::test]
async fn test_report_metadata() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "8", "20", "5", "50"),
    )
    .await;

    assert!(json["calculation_id"].is_string());
    assert!(json["timestamp"].is_string());
    assert_eq!(json["engine_version"], env!("CARGO_PKG_VERSION"));
    assert!(json["audit_trace"]["duration_us"].is_u64());
}

#[tokio::test]
async fn test_audit_trace_is_sequential() {
    let (_, json) = post_calculate(
        create_router_for_test(),
        create_request("10", "8", "20", "5", "50"),
    )
    .await;

    let steps = json["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 11);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"].as_u64().unwrap(), i as u64 + 1);
    }
    assert_eq!(steps[6]["rule_id"], "base_earnings");
    assert_eq!(steps[9]["rule_id"], "total_earnings");
    assert_eq!(steps[9]["reasoning"], "1600 + 75 = 1675");
}

#[tokio::test]
async fn test_repeated_requests_recompute() {
    let router = create_router_for_test();

    let (_, first) =
        post_calculate(router.clone(), create_request("10", "8", "20", "5", "50")).await;
    let (_, second) = post_calculate(router, create_request("10", "8", "20", "6", "50")).await;

    assert_ne!(first["calculation_id"], second["calculation_id"]);
    assert_eq!(field(&first, "breakdown", "total_earnings"), decimal("1675"));
    assert_eq!(
        field(&second, "breakdown", "total_earnings"),
        decimal("1690")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_currency_display_follows_configuration() {
    let mut config = CalculatorConfig::default();
    config.currency.symbol = "€".to_string();
    config.currency.symbol_position = SymbolPosition::Suffix;
    config.currency.thousands_separator = ".".to_string();
    config.currency.decimal_separator = ",".to_string();
    let router = create_router(AppState::new(ConfigLoader::from_config(config).unwrap()));

    let (_, json) = post_calculate(router, create_request("10", "8", "20", "5", "50")).await;

    assert_eq!(json["display"]["total_earnings"], "1.675,00 €");
    assert_eq!(json["display"]["overtime_rate"], "15,00 €");

    for step in json["audit_trace"]["steps"].as_array().unwrap() {
        let reasoning = step["reasoning"].as_str().unwrap();
        assert!(!reasoning.contains('$'), "{}", reasoning);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_non_object_body_returns_400() {
    let (status, json) =
        post_calculate(create_router_for_test(), json!("ten dollars an hour")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_empty_array_body_returns_400() {
    let (status, json) = post_calculate(create_router_for_test(), json!([])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_positional_array_body_returns_400() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        json!(["10", "8", "20", "5", "50"]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_boolean_field_returns_400() {
    let (status, json) = post_calculate(
        create_router_for_test(),
        json!({ "earnings_per_hour": true }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/calculate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
