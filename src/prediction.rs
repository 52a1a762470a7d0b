//! PM10 prediction summaries.
//!
//! The prediction view consumes a list of timestamped predicted PM10 points
//! and a summary: average, minimum, maximum and a coarse trend label. Points
//! may arrive out of order and are sorted chronologically before use.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Absolute first-to-last change (µg/m³) within which a series is stable.
pub const STABLE_TOLERANCE: f64 = 2.0;

/// One predicted PM10 value at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub timestamp: NaiveDateTime,
    pub predicted_pm10: f64,
}

/// Coarse direction of a prediction series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Summary statistics over a prediction series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub avg_predicted_pm10: f64,
    pub min_predicted_pm10: f64,
    pub max_predicted_pm10: f64,
    pub trend: Trend,
}

/// Classify the trend from the first and last predicted values.
pub fn classify_trend(first: f64, last: f64) -> Trend {
    let delta = last - first;
    if delta.abs() <= STABLE_TOLERANCE {
        Trend::Stable
    } else if delta > 0.0 {
        Trend::Rising
    } else {
        Trend::Falling
    }
}

/// Sort a prediction series chronologically and summarize it.
///
/// Returns `None` for an empty series.
pub fn summarize(points: &mut [PredictionPoint]) -> Option<PredictionSummary> {
    if points.is_empty() {
        return None;
    }

    points.sort_by_key(|point| point.timestamp);

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points.iter() {
        sum += point.predicted_pm10;
        min = min.min(point.predicted_pm10);
        max = max.max(point.predicted_pm10);
    }

    let first = points[0].predicted_pm10;
    let last = points[points.len() - 1].predicted_pm10;

    Some(PredictionSummary {
        avg_predicted_pm10: sum / points.len() as f64,
        min_predicted_pm10: min,
        max_predicted_pm10: max,
        trend: classify_trend(first, last),
    })
}
