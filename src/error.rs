//! Error taxonomy for the scoring core.
//!
//! Both variants surface synchronously to the caller; the core never logs,
//! retries or swallows them. A single bad reading is recoverable and must not
//! abort processing of the rest of a series.

use thiserror::Error;

use crate::reading::Pollutant;

/// Errors raised by the AQI calculator and quality classifier.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AqiError {
    /// A pollutant concentration was missing, non-finite or negative.
    ///
    /// Recoverable: skip the reading, substitute a sentinel, or surface it.
    /// Missing slots arrive here as NaN (never silently treated as zero).
    #[error("invalid {pollutant} reading: {value} (expected a finite value >= 0)")]
    InvalidReading { pollutant: Pollutant, value: f64 },

    /// A negative index was passed to the classifier.
    ///
    /// The calculator never produces negative output, so this indicates a
    /// caller-side contract violation rather than expected runtime input.
    #[error("invalid AQI: {aqi} (expected >= 0)")]
    InvalidAqi { aqi: i64 },
}
