//! Quality levels: the fixed six-tier threshold table and the classifier.
//!
//! The table is process-wide, read-only configuration. Each entry carries
//! both the display label and its color so the two can never drift apart;
//! callers must not recompute colors separately.

use serde::Serialize;

use crate::error::AqiError;

// ============================================================================
// Threshold table
// ============================================================================

/// One quality category: label, inclusive AQI ceiling and display color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityLevel {
    pub name: &'static str,
    /// Inclusive ceiling on the AQI scalar; the last entry is unbounded.
    pub upper_bound: f64,
    pub color: &'static str,
}

/// The six categories, ordered best to worst air quality.
///
/// Sorted by strictly increasing `upper_bound`; the final ceiling is
/// unbounded so classification always terminates with a match. Constructed
/// once, shared by reference, never mutated.
pub static QUALITY_LEVELS: [QualityLevel; 6] = [
    QualityLevel {
        name: "Very good",
        upper_bound: 20.0,
        color: "#58B108",
    },
    QualityLevel {
        name: "Good",
        upper_bound: 40.0,
        color: "#B0DD10",
    },
    QualityLevel {
        name: "Moderate",
        upper_bound: 60.0,
        color: "#FED93F",
    },
    QualityLevel {
        name: "Sufficient",
        upper_bound: 80.0,
        color: "#FE7D10",
    },
    QualityLevel {
        name: "Bad",
        upper_bound: 100.0,
        color: "#ED1D1D",
    },
    QualityLevel {
        name: "Very bad",
        upper_bound: f64::INFINITY,
        color: "#800080",
    },
];

impl QualityLevel {
    /// Ordinal position in the table, 0 = best.
    ///
    /// Display layers sort the label column on this instead of
    /// alphabetically.
    pub fn rank(&self) -> usize {
        QUALITY_LEVELS
            .iter()
            .position(|level| level.name == self.name)
            .unwrap_or(QUALITY_LEVELS.len() - 1)
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Map an AQI scalar to its quality level.
///
/// Scans the ascending table and returns the first entry whose ceiling is
/// >= the input, so boundary values land in the lower category (an AQI of
/// exactly 40 is "Good", not "Moderate"). Negative input is a caller-side
/// contract violation.
pub fn classify(aqi: i64) -> Result<&'static QualityLevel, AqiError> {
    if aqi < 0 {
        return Err(AqiError::InvalidAqi { aqi });
    }

    for level in &QUALITY_LEVELS {
        if aqi as f64 <= level.upper_bound {
            return Ok(level);
        }
    }

    // Fallback (unreachable: the last ceiling is unbounded)
    Ok(&QUALITY_LEVELS[QUALITY_LEVELS.len() - 1])
}

// ============================================================================
// Label lookups
// ============================================================================

/// Level for a display label, if the label is one of the six fixed values.
pub fn level_of(name: &str) -> Option<&'static QualityLevel> {
    QUALITY_LEVELS.iter().find(|level| level.name == name)
}

/// Display color for a label.
pub fn color_of(name: &str) -> Option<&'static str> {
    level_of(name).map(|level| level.color)
}

/// Sort ordinal for a label, 0 = best.
pub fn rank_of(name: &str) -> Option<usize> {
    QUALITY_LEVELS.iter().position(|level| level.name == name)
}
