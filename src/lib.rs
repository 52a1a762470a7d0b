//! Air Quality Index engine.
//!
//! Scores pollutant concentration readings into a single AQI scalar and
//! buckets it into one of six fixed, color-coded quality levels:
//! - `reading`: the four-pollutant value object and validation
//! - `index`: per-pollutant sub-indices and the max-of-four reduction
//! - `levels`: the threshold table and classifier
//! - `data`: ingestion of the upstream API's parallel hourly arrays
//! - `series`: scored, display-ready rows (sequential and Rayon-parallel)
//! - `stats`: per-day aggregation
//! - `prediction`: PM10 prediction summaries
//!
//! The core is pure and stateless: every computation is a function of one
//! reading and the static threshold table, safe to call from any number of
//! threads without synchronization.

pub mod data;
pub mod error;
pub mod index;
pub mod levels;
pub mod prediction;
pub mod reading;
pub mod series;
pub mod stats;

// Re-export commonly used types
pub use data::{parse_payload, HourlyBlock, HourlyPayload, HourlyReading};
pub use error::AqiError;
pub use index::{compute_aqi, compute_breakdown, score, AqiBreakdown, AqiResult, SubIndex};
pub use levels::{classify, color_of, level_of, rank_of, QualityLevel, QUALITY_LEVELS};
pub use prediction::{classify_trend, summarize, PredictionPoint, PredictionSummary, Trend};
pub use reading::{Pollutant, PollutantReading};
pub use series::{score_series, score_series_parallel, ScoredHour, ScoredSeries, DATA_SOURCE};
pub use stats::{daily_stats, DailyStats, ParameterStats};
