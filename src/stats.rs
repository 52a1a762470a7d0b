//! Daily aggregation over scored rows.
//!
//! Recreates the dashboard's per-day statistics: averages, minimums and
//! maximums for every pollutant column plus the AQI itself. Missing `so2`
//! slots are excluded from aggregation; a day with no data for a column
//! reports NaN for it.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::series::ScoredHour;

/// Per-parameter values for one day (one of average, minimum or maximum).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterStats {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
    pub aqi: f64,
}

/// One calendar day of aggregated statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub averages: ParameterStats,
    pub minimums: ParameterStats,
    pub maximums: ParameterStats,
}

fn column_stats(rows: &[&ScoredHour], value: impl Fn(&ScoredHour) -> Option<f64>) -> (f64, f64, f64) {
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut count = 0usize;

    for row in rows {
        let Some(v) = value(row) else { continue };
        sum += v;
        min = min.min(v);
        max = max.max(v);
        count += 1;
    }

    if count == 0 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    (sum / count as f64, min, max)
}

/// Aggregate scored rows into per-day statistics, sorted chronologically.
pub fn daily_stats(rows: &[ScoredHour]) -> Vec<DailyStats> {
    let mut by_date: FxHashMap<NaiveDate, Vec<&ScoredHour>> = FxHashMap::default();
    for row in rows {
        by_date.entry(row.date).or_default().push(row);
    }

    let mut days: Vec<DailyStats> = by_date
        .into_iter()
        .map(|(date, day_rows)| {
            let (avg_pm2_5, min_pm2_5, max_pm2_5) = column_stats(&day_rows, |r| Some(r.pm2_5));
            let (avg_pm10, min_pm10, max_pm10) = column_stats(&day_rows, |r| Some(r.pm10));
            let (avg_no2, min_no2, max_no2) = column_stats(&day_rows, |r| Some(r.no2));
            let (avg_so2, min_so2, max_so2) = column_stats(&day_rows, |r| r.so2);
            let (avg_o3, min_o3, max_o3) = column_stats(&day_rows, |r| Some(r.o3));
            let (avg_aqi, min_aqi, max_aqi) = column_stats(&day_rows, |r| Some(f64::from(r.aqi)));

            DailyStats {
                date,
                averages: ParameterStats {
                    pm2_5: avg_pm2_5,
                    pm10: avg_pm10,
                    no2: avg_no2,
                    so2: avg_so2,
                    o3: avg_o3,
                    aqi: avg_aqi,
                },
                minimums: ParameterStats {
                    pm2_5: min_pm2_5,
                    pm10: min_pm10,
                    no2: min_no2,
                    so2: min_so2,
                    o3: min_o3,
                    aqi: min_aqi,
                },
                maximums: ParameterStats {
                    pm2_5: max_pm2_5,
                    pm10: max_pm10,
                    no2: max_no2,
                    so2: max_so2,
                    o3: max_o3,
                    aqi: max_aqi,
                },
            }
        })
        .collect();

    days.sort_by_key(|day| day.date);
    days
}
