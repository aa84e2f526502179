//! Performance benchmarks for the Benefit Simulation Engine.
//!
//! Covers the three pure calculations and a full HTTP round trip through
//! the router. The pension benchmark is parameterised by duration because
//! the compounding loop scales with the number of projected months.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use benefit_engine::api::{AppState, create_router};
use benefit_engine::calculation::{calculate_pension, calculate_retirement, calculate_severance};
use benefit_engine::config::RulesLoader;
use benefit_engine::models::{Gender, PersonProfile, TerminationType};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn load_rules() -> RulesLoader {
    RulesLoader::load("./config/br2024").expect("Failed to load config")
}

fn bench_retirement(c: &mut Criterion) {
    let rules = load_rules();
    let profile = PersonProfile {
        name: "Benchmark".to_string(),
        age: 45,
        contribution_years: 20,
        average_wage: Decimal::from_str("3500.00").unwrap(),
        gender: Gender::Female,
    };
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("retirement_estimate", |b| {
        b.iter(|| black_box(calculate_retirement(&profile, rules.inss(), today)))
    });
}

fn bench_severance(c: &mut Criterion) {
    let rules = load_rules();
    let wage = Decimal::from_str("3500.00").unwrap();

    c.bench_function("severance_statement", |b| {
        b.iter(|| {
            black_box(calculate_severance(
                wage,
                30,
                10,
                TerminationType::WithoutCause,
                rules.labour(),
            ))
        })
    });
}

/// The projection recomputes the closed form per year, so cost grows with
/// the contribution duration.
fn bench_pension_durations(c: &mut Criterion) {
    let contribution = Decimal::from_str("500.00").unwrap();
    let rate = Decimal::from(8);

    let mut group = c.benchmark_group("pension_projection");
    for duration in [5u32, 15, 30, 50] {
        group.throughput(Throughput::Elements(duration as u64));
        group.bench_with_input(
            BenchmarkId::new("duration_years", duration),
            &duration,
            |b, &duration| {
                b.iter(|| black_box(calculate_pension(contribution, duration, rate, 30)))
            },
        );
    }
    group.finish();
}

/// Full request round trip through the router, including JSON parsing,
/// validation, and history recording.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_rules());
    let router = create_router(state);
    let body = serde_json::json!({
        "name": "Benchmark",
        "age": 45,
        "contribution_years": 20,
        "average_wage": "3500.00",
        "gender": "female"
    })
    .to_string();

    c.bench_function("http_retirement_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/simulate/retirement")
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

criterion_group!(
    benches,
    bench_retirement,
    bench_severance,
    bench_pension_durations,
    bench_http_round_trip,
);
criterion_main!(benches);
