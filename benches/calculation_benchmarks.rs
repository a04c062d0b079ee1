//! Performance benchmarks for the overtime control engine.
//!
//! Covers the three layers a request passes through:
//! - Field parsing
//! - The calculation pass, from parsed input and from raw form text
//! - The full HTTP round trip, singly and in batches
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use overtime_control::api::{AppState, create_router};
use overtime_control::calculation::{calculate_earnings, calculate_form};
use overtime_control::config::{CalculatorConfig, ConfigLoader};
use overtime_control::formatting::CurrencyFormat;
use overtime_control::models::EarningsForm;
use overtime_control::parsing::{parse_field, parse_form};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with the default configuration.
fn create_test_state() -> AppState {
    let config =
        ConfigLoader::from_config(CalculatorConfig::default()).expect("Failed to build config");
    AppState::new(config)
}

/// A typical month: $28.54/h, 7.6h/day, 21 days, 6.5 overtime hours at +50%.
fn create_form() -> EarningsForm {
    EarningsForm {
        earnings_per_hour: "28.54".to_string(),
        hours_worked_per_day: "7.6".to_string(),
        days_worked_per_month: "21".to_string(),
        overtime_hours_in_month: "6.5".to_string(),
        overtime_surcharge_percent: "50".to_string(),
        night_surcharge_percent: "20".to_string(),
    }
}

fn calculate_body(form: &EarningsForm) -> String {
    serde_json::to_string(form).expect("Failed to serialize form")
}

/// Benchmark: parsing individual field text.
fn bench_parse_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_field");

    for text in ["28.54", "", "not a number", "1.5e3", "  -12.75  "] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", text)),
            &text,
            |b, t| b.iter(|| parse_field(black_box(t))),
        );
    }

    group.finish();
}

/// Benchmark: the calculation pass with and without parsing.
fn bench_calculation_pass(c: &mut Criterion) {
    let form = create_form();
    let currency = CurrencyFormat::default();
    let input = parse_form(&form, 1).input;

    c.bench_function("calculate_earnings", |b| {
        b.iter(|| calculate_earnings(black_box(&input), &currency))
    });

    c.bench_function("calculate_form", |b| {
        b.iter(|| calculate_form(black_box(&form), &currency))
    });
}

/// Benchmark: a single request through the HTTP router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = calculate_body(&create_form());

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batches of distinct forms through the HTTP router.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("batch_processing");

    for batch_size in [100usize, 1000] {
        let requests: Vec<String> = (0..batch_size)
            .map(|i| {
                let mut form = create_form();
                form.overtime_hours_in_month = format!("{}.5", i % 40);
                if i % 7 == 0 {
                    form.earnings_per_hour = "n/a".to_string();
                }
                calculate_body(&form)
            })
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        if batch_size >= 1000 {
            group.sample_size(10);
        }

        group.bench_with_input(
            BenchmarkId::new("requests", batch_size),
            &requests,
            |b, requests| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for body in requests {
                        let router = create_router(state.clone());
                        let response = router
                            .oneshot(
                                Request::builder()
                                    .method("POST")
                                    .uri("/calculate")
                                    .header("Content-Type", "application/json")
                                    .body(Body::from(body.clone()))
                                    .unwrap(),
                            )
                            .await
                            .unwrap();
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_field,
    bench_calculation_pass,
    bench_single_request,
    bench_batches,
);
criterion_main!(benches);
