//! AQI calculation: per-pollutant sub-indices and the max-of-four reduction.
//!
//! The worst single pollutant governs the reported index; averaging would
//! mask spikes. Sub-indices above 100 are intentional when a concentration
//! exceeds its reference ceiling; the unbounded last quality level absorbs
//! them.

use smallvec::SmallVec;

use crate::error::AqiError;
use crate::levels::{classify, QualityLevel};
use crate::reading::{Pollutant, PollutantReading};

/// Sub-index points a concentration at the reference ceiling maps to.
const CEILING_POINTS: f64 = 50.0;

/// One pollutant's scaled contribution before the max reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubIndex {
    pub pollutant: Pollutant,
    pub value: u32,
}

/// Full calculation output: the index, the governing pollutant and every
/// sub-index in pollutant order.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiBreakdown {
    pub aqi: u32,
    pub governing: Pollutant,
    pub sub_indices: SmallVec<[SubIndex; 4]>,
}

/// Computed result for one reading: the scalar index plus its quality level.
///
/// Constructed fresh per reading, never cached. The level reference carries
/// both label and color; callers must not derive color separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiResult {
    pub aqi: u32,
    pub level: &'static QualityLevel,
}

/// Scale one concentration against its reference ceiling.
///
/// `round(concentration / ceiling * 50)`, ties rounding away from zero
/// (`f64::round`). Rejects non-finite or negative input.
pub fn sub_index(pollutant: Pollutant, concentration: f64) -> Result<u32, AqiError> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(AqiError::InvalidReading {
            pollutant,
            value: concentration,
        });
    }

    let scaled = concentration / pollutant.reference_ceiling() * CEILING_POINTS;
    Ok(scaled.round() as u32)
}

/// Compute the AQI together with its per-pollutant breakdown.
///
/// # Algorithm
/// 1. Scale each of the four concentrations to a sub-index.
/// 2. Take the maximum; that pollutant is the governing one. On ties the
///    earliest pollutant in [`Pollutant::ALL`] order wins.
pub fn compute_breakdown(reading: &PollutantReading) -> Result<AqiBreakdown, AqiError> {
    let mut sub_indices: SmallVec<[SubIndex; 4]> = SmallVec::new();
    for pollutant in Pollutant::ALL {
        sub_indices.push(SubIndex {
            pollutant,
            value: sub_index(pollutant, reading.concentration(pollutant))?,
        });
    }

    let mut governing = sub_indices[0];
    for candidate in &sub_indices[1..] {
        if candidate.value > governing.value {
            governing = *candidate;
        }
    }

    Ok(AqiBreakdown {
        aqi: governing.value,
        governing: governing.pollutant,
        sub_indices,
    })
}

/// Compute the AQI scalar for one reading.
///
/// Pure function: no side effects, no logging, no upper bound on the output.
pub fn compute_aqi(reading: &PollutantReading) -> Result<u32, AqiError> {
    Ok(compute_breakdown(reading)?.aqi)
}

/// Compute the AQI and classify it in one step.
pub fn score(reading: &PollutantReading) -> Result<AqiResult, AqiError> {
    let aqi = compute_aqi(reading)?;
    let level = classify(i64::from(aqi))?;
    Ok(AqiResult { aqi, level })
}
