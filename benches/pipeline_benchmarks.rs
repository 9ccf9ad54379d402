//! Performance benchmarks for the shift ledger engine.
//!
//! Covers the pipeline called directly (one month, a half-year, a large
//! roster) and the `/process` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_ledger::api::{AppState, create_router};
use shift_ledger::calculation::{classify_shift, process_schedules};
use shift_ledger::config::{ConfigLoader, ShiftRules};
use shift_ledger::models::{HalfYear, MonthlySchedule, ScheduleRow, SettlementWindow};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const ROTATION: [&str; 8] = ["D", "N", "0", "0", "DTS", "FOTS", "F", "A"];

fn load_rules() -> ShiftRules {
    ConfigLoader::load("./config/shift_rules.yaml")
        .expect("Failed to load config")
        .into_rules()
}

/// Builds Jan..Jun sheets for `employees` people on a rotating pattern.
fn half_year(employees: usize) -> Vec<MonthlySchedule> {
    (1..=6)
        .map(|month| {
            (0..employees).fold(MonthlySchedule::new(2025, month), |sheet, i| {
                let codes: Vec<&str> = ROTATION.iter().cycle().skip(i).take(31).copied().collect();
                sheet.with_row(
                    ScheduleRow::new(format!("Employee {:04}", i), "CT").with_codes(&codes),
                )
            })
        })
        .collect()
}

fn bench_classify_shift(c: &mut Criterion) {
    let rules = load_rules();

    c.bench_function("classify_shift", |b| {
        b.iter(|| {
            for code in ROTATION {
                black_box(classify_shift(black_box(code), &rules));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let rules = load_rules();
    let window = SettlementWindow::half_year(2025, HalfYear::First).expect("valid window");

    let mut group = c.benchmark_group("pipeline_half_year");
    for employees in [1usize, 50, 500] {
        let sheets = half_year(employees);
        group.throughput(Throughput::Elements(employees as u64));
        if employees >= 500 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::from_parameter(employees), &sheets, |b, sheets| {
            b.iter(|| black_box(process_schedules(sheets, &rules, Some(&window))))
        });
    }
    group.finish();
}

fn bench_process_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_rules()));
    let body = serde_json::json!({
        "schedules": half_year(20),
        "window": { "start": "2025-01", "end": "2025-06" }
    })
    .to_string();

    c.bench_function("process_endpoint_20_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/process")
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
    bench_classify_shift,
    bench_pipeline,
    bench_process_endpoint
);
criterion_main!(benches);
