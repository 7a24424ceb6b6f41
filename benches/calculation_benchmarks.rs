//! Performance benchmarks for the pension and payroll engine.
//!
//! - Pension projection over the longest age span
//! - Projection scaling across horizons
//! - Single payroll calculation with a full compensation structure
//! - Both HTTP endpoints end to end through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use pension_engine::api::{AppState, create_router};
use pension_engine::calculation::{calculate, project};
use pension_engine::config::ConfigLoader;
use pension_engine::models::{
    FeeRegime, OptionalAllowance, OptionalAllowances, PayrollInput, PensionProjectionInput,
    Standby,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/service.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn projection_input(current_age: u32, retirement_age: u32) -> PensionProjectionInput {
    PensionProjectionInput {
        current_age,
        retirement_age,
        current_balance: 150_000.0,
        monthly_deposit: 4_100.0,
        annual_return_percent: 4.38,
        current_fees: FeeRegime {
            fee_on_deposit_percent: 1.5,
            fee_on_balance_percent: 0.5,
        },
        alternative_fees: FeeRegime {
            fee_on_deposit_percent: 0.9,
            fee_on_balance_percent: 0.2,
        },
    }
}

fn payroll_input() -> PayrollInput {
    let mut allowances = BTreeMap::new();
    allowances.insert("food".to_string(), dec!(400));
    allowances.insert("transport".to_string(), dec!(315));

    PayrollInput {
        base_salary: dec!(14500),
        work_hours: dec!(186),
        overtime_hours: dec!(12),
        weekend_hours: dec!(8),
        holiday_hours: dec!(4),
        allowances,
        standby: Some(Standby::Fixed {
            days: dec!(3),
            rate: dec!(150),
        }),
        optional_allowances: OptionalAllowances {
            phone: OptionalAllowance {
                enabled: true,
                amount: dec!(100),
            },
            ..OptionalAllowances::default()
        },
        pension_contribution_percent: dec!(6),
        study_fund_contribution_percent: dec!(2.5),
        tax_credit_points: dec!(2.25),
        ..PayrollInput::default()
    }
}

/// Benchmark: Projection over the longest age span (18 to 67).
fn bench_projection_longest_horizon(c: &mut Criterion) {
    let input = projection_input(18, 67);

    c.bench_function("projection_49_years", |b| {
        b.iter(|| black_box(project(black_box(&input)).unwrap()))
    });
}

/// Benchmark: Projection horizons to understand scaling behavior.
fn bench_projection_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_scaling");

    for years in [1u32, 10, 25, 49].iter() {
        let input = projection_input(67 - years, 67);

        group.throughput(Throughput::Elements(u64::from(*years) * 12));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| black_box(project(black_box(&input)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: Single gross-to-net calculation.
fn bench_payroll(c: &mut Criterion) {
    let input = payroll_input();

    c.bench_function("payroll_full_structure", |b| {
        b.iter(|| black_box(calculate(black_box(&input)).unwrap()))
    });
}

/// Benchmark: Both endpoints through the router.
fn bench_http_endpoints(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let projection_body = serde_json::json!({
        "currentAge": 35,
        "retirementAge": 67,
        "currentBalance": 150000,
        "monthlyDeposit": 4100,
        "annualReturnPercent": 4.38,
        "currentFees": { "feeOnDepositPercent": 1.5, "feeOnBalancePercent": 0.5 },
        "alternativeFees": { "feeOnDepositPercent": 0.9, "feeOnBalancePercent": 0.2 }
    })
    .to_string();

    let salary_body = serde_json::json!({
        "baseSalary": 12000,
        "workHours": 186,
        "overtimeHours": 6,
        "allowances": { "food": 400 },
        "pensionContributionPercent": 6,
        "taxCreditPoints": 2.25
    })
    .to_string();

    let mut group = c.benchmark_group("http");

    for (name, uri, body) in [
        ("calculate", "/api/calculate", projection_body),
        ("calculate_salary", "/api/calculate-salary", salary_body),
    ] {
        group.bench_function(name, |b| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri(uri)
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

    group.finish();
}

criterion_group!(
    benches,
    bench_projection_longest_horizon,
    bench_projection_scaling,
    bench_payroll,
    bench_http_endpoints,
);
criterion_main!(benches);
