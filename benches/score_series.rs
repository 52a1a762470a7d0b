//! Series scoring benchmarks: sequential vs Rayon-parallel over a week of
//! synthetic hourly readings.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use chrono::{Duration, NaiveDate};

use aqi_scorer::{score_series, score_series_parallel, HourlyReading};

fn synth_hours(count: usize) -> Vec<HourlyReading> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| HourlyReading {
            timestamp: start + Duration::hours(i as i64),
            pm10: Some(20.0 + (i % 30) as f64),
            pm2_5: Some(8.0 + (i % 15) as f64),
            no2: Some(25.0 + (i % 10) as f64),
            so2: Some(4.0),
            o3: Some(50.0 + (i % 40) as f64),
        })
        .collect()
}

fn bench_score_series(c: &mut Criterion) {
    let week = synth_hours(7 * 24);

    c.bench_function("score_series_168h", |b| {
        b.iter(|| score_series(black_box(&week), "Rzeszów"))
    });

    c.bench_function("score_series_168h_parallel", |b| {
        b.iter(|| score_series_parallel(black_box(&week), "Rzeszów"))
    });
}

criterion_group!(benches, bench_score_series);
criterion_main!(benches);
