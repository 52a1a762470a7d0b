//! Series scoring: aligned hourly readings into display-ready rows.
//!
//! Each row is independent, so evaluation order is free; a parallel variant
//! fans rows out over Rayon. Hours that fail validation are skipped and
//! counted rather than aborting the series.

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use chrono::{NaiveDate, NaiveTime};

use crate::data::HourlyReading;
use crate::index::score;

/// Upstream identifier recorded on every row.
pub const DATA_SOURCE: &str = "Open-Meteo API";

/// Hours from the start of the series that are measurements; rows past the
/// first full day carry the forecast flag.
pub const MEASURED_HOURS: usize = 24;

/// One scored row, shaped for table display and export.
///
/// `quality_level` is always one of the six fixed labels, so sorting and
/// filtering on it stay stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHour {
    pub id: usize,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub pm10: f64,
    pub pm2_5: f64,
    pub no2: f64,
    pub so2: Option<f64>,
    pub o3: f64,
    pub aqi: u32,
    pub quality_level: &'static str,
    pub location: String,
    pub source: String,
    pub forecast_data: bool,
}

/// Outcome of scoring a series: rows plus the count of skipped hours.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoredSeries {
    pub rows: Vec<ScoredHour>,
    pub skipped: usize,
}

fn score_hour(index: usize, hour: &HourlyReading, location: &str) -> Option<ScoredHour> {
    let reading = match hour.reading() {
        Ok(reading) => reading,
        Err(error) => {
            warn!(index, timestamp = %hour.timestamp, %error, "skipping unscoreable hour");
            return None;
        }
    };
    let result = match score(&reading) {
        Ok(result) => result,
        Err(error) => {
            warn!(index, timestamp = %hour.timestamp, %error, "skipping unscoreable hour");
            return None;
        }
    };

    Some(ScoredHour {
        id: index + 1,
        date: hour.timestamp.date(),
        time: hour.timestamp.time(),
        pm10: reading.pm10,
        pm2_5: reading.pm2_5,
        no2: reading.no2,
        so2: hour.so2,
        o3: reading.o3,
        aqi: result.aqi,
        quality_level: result.level.name,
        location: location.to_string(),
        source: DATA_SOURCE.to_string(),
        forecast_data: index > MEASURED_HOURS,
    })
}

/// Score a series sequentially.
///
/// Row ids stay 1-based and tied to the input slot even when earlier hours
/// are skipped.
pub fn score_series(hours: &[HourlyReading], location: &str) -> ScoredSeries {
    let rows: Vec<ScoredHour> = hours
        .iter()
        .enumerate()
        .filter_map(|(index, hour)| score_hour(index, hour, location))
        .collect();
    let skipped = hours.len() - rows.len();
    ScoredSeries { rows, skipped }
}

/// Score a series across Rayon workers.
///
/// Produces the same rows in the same order as [`score_series`].
pub fn score_series_parallel(hours: &[HourlyReading], location: &str) -> ScoredSeries {
    let rows: Vec<ScoredHour> = hours
        .par_iter()
        .enumerate()
        .filter_map(|(index, hour)| score_hour(index, hour, location))
        .collect();
    let skipped = hours.len() - rows.len();
    ScoredSeries { rows, skipped }
}
