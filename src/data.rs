//! Hourly payload ingestion.
//!
//! The upstream air-quality API reports hourly concentrations as parallel
//! arrays keyed by pollutant, one slot per timestamp, with `null` marking
//! gaps. This module deserializes that wire shape and aligns the arrays
//! positionally into per-hour readings. Fetching the payload over HTTP is
//! the caller's concern; ingestion starts at the response body.

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::AqiError;
use crate::reading::PollutantReading;

/// Response body of the upstream air-quality API.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyPayload {
    pub hourly: HourlyBlock,
}

/// Parallel hourly arrays. Every concentration array must have one slot per
/// entry in `time`; slots may be null where the station reported no value.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub pm10: Vec<Option<f64>>,
    pub pm2_5: Vec<Option<f64>>,
    pub nitrogen_dioxide: Vec<Option<f64>>,
    /// Carried through for display and aggregation; never scored.
    #[serde(default)]
    pub sulphur_dioxide: Option<Vec<Option<f64>>>,
    pub ozone: Vec<Option<f64>>,
}

/// One hour of aligned concentrations.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyReading {
    pub timestamp: NaiveDateTime,
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
}

impl HourlyReading {
    /// Scored view of this hour.
    ///
    /// Missing slots surface as [`AqiError::InvalidReading`] with a NaN
    /// value, never as zero.
    pub fn reading(&self) -> Result<PollutantReading, AqiError> {
        PollutantReading::new(
            self.pm2_5.unwrap_or(f64::NAN),
            self.pm10.unwrap_or(f64::NAN),
            self.no2.unwrap_or(f64::NAN),
            self.o3.unwrap_or(f64::NAN),
        )
    }
}

impl HourlyBlock {
    /// Align the parallel arrays into per-hour readings.
    ///
    /// Fails if any concentration array disagrees with `time` on length or
    /// if a timestamp does not parse; the caller aligns indices by
    /// timestamp, so a ragged payload cannot be scored positionally.
    pub fn align(&self) -> Result<Vec<HourlyReading>> {
        let hours = self.time.len();
        check_len("pm10", self.pm10.len(), hours)?;
        check_len("pm2_5", self.pm2_5.len(), hours)?;
        check_len("nitrogen_dioxide", self.nitrogen_dioxide.len(), hours)?;
        check_len("ozone", self.ozone.len(), hours)?;
        if let Some(so2) = &self.sulphur_dioxide {
            check_len("sulphur_dioxide", so2.len(), hours)?;
        }

        let mut readings = Vec::with_capacity(hours);
        for (index, stamp) in self.time.iter().enumerate() {
            let timestamp = parse_hour_stamp(stamp)
                .with_context(|| format!("bad hourly timestamp at slot {index}"))?;
            readings.push(HourlyReading {
                timestamp,
                pm10: self.pm10[index],
                pm2_5: self.pm2_5[index],
                no2: self.nitrogen_dioxide[index],
                so2: self.sulphur_dioxide.as_ref().and_then(|so2| so2[index]),
                o3: self.ozone[index],
            });
        }

        Ok(readings)
    }
}

/// Parse a raw API response body into aligned hourly readings.
pub fn parse_payload(body: &str) -> Result<Vec<HourlyReading>> {
    let payload: HourlyPayload =
        serde_json::from_str(body).context("failed to parse air-quality payload JSON")?;
    payload.hourly.align()
}

fn check_len(name: &str, len: usize, expected: usize) -> Result<()> {
    if len != expected {
        bail!("hourly array '{name}' has {len} slots, expected {expected}");
    }
    Ok(())
}

// The API emits minute precision ("2024-01-15T14:00"); accept seconds too.
fn parse_hour_stamp(stamp: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S"))
        .with_context(|| format!("unparseable timestamp {stamp:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Pollutant;

    const PAYLOAD: &str = r#"{
        "hourly": {
            "time": ["2024-01-15T00:00", "2024-01-15T01:00", "2024-01-15T02:00"],
            "pm10": [28.5, 30.1, null],
            "pm2_5": [15.2, 16.0, 14.8],
            "nitrogen_dioxide": [21.0, 22.4, 19.9],
            "sulphur_dioxide": [4.1, null, 3.9],
            "ozone": [55.0, 54.2, 57.3]
        }
    }"#;

    #[test]
    fn test_parse_payload_aligns_slots() {
        let readings = parse_payload(PAYLOAD).unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].pm10, Some(28.5));
        assert_eq!(readings[1].so2, None);
        assert_eq!(readings[2].pm10, None);
        assert_eq!(
            readings[1].timestamp.format("%Y-%m-%dT%H:%M").to_string(),
            "2024-01-15T01:00"
        );
    }

    #[test]
    fn test_missing_sulphur_dioxide_array_is_tolerated() {
        let body = r#"{
            "hourly": {
                "time": ["2024-01-15T00:00"],
                "pm10": [28.5],
                "pm2_5": [15.2],
                "nitrogen_dioxide": [21.0],
                "ozone": [55.0]
            }
        }"#;
        let readings = parse_payload(body).unwrap();
        assert_eq!(readings[0].so2, None);
        assert!(readings[0].reading().is_ok());
    }

    #[test]
    fn test_ragged_arrays_are_rejected() {
        let body = r#"{
            "hourly": {
                "time": ["2024-01-15T00:00", "2024-01-15T01:00"],
                "pm10": [28.5],
                "pm2_5": [15.2, 16.0],
                "nitrogen_dioxide": [21.0, 22.4],
                "ozone": [55.0, 54.2]
            }
        }"#;
        let err = parse_payload(body).unwrap_err();
        assert!(err.to_string().contains("pm10"));
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let body = r#"{
            "hourly": {
                "time": ["15/01/2024 00:00"],
                "pm10": [28.5],
                "pm2_5": [15.2],
                "nitrogen_dioxide": [21.0],
                "ozone": [55.0]
            }
        }"#;
        assert!(parse_payload(body).is_err());
    }

    #[test]
    fn test_seconds_precision_is_accepted() {
        assert!(parse_hour_stamp("2024-01-15T14:00:00").is_ok());
    }

    #[test]
    fn test_null_slot_surfaces_as_invalid_reading() {
        let readings = parse_payload(PAYLOAD).unwrap();
        let err = readings[2].reading().unwrap_err();
        match err {
            AqiError::InvalidReading { pollutant, value } => {
                assert_eq!(pollutant, Pollutant::Pm10);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
