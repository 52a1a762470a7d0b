//! Pollutant reading value object.
//!
//! A reading holds the four concentrations the calculator scores, each in
//! micrograms per cubic meter. Sulphur dioxide is carried alongside readings
//! at the series level for display and aggregation but is never scored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AqiError;

/// The four pollutants that feed the AQI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "pm2_5")]
    Pm25,
    #[serde(rename = "pm10")]
    Pm10,
    #[serde(rename = "no2")]
    No2,
    #[serde(rename = "o3")]
    O3,
}

impl Pollutant {
    /// All scored pollutants, in the order sub-indices are reported.
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::O3,
    ];

    /// Reference concentration (µg/m³) that maps to a sub-index of 50.
    pub fn reference_ceiling(self) -> f64 {
        match self {
            Pollutant::Pm25 => 25.0,
            Pollutant::Pm10 => 50.0,
            Pollutant::No2 => 200.0,
            Pollutant::O3 => 180.0,
        }
    }

    /// Stable field key, matching the wire/export column names.
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One hour's worth of scored concentrations, each in µg/m³.
///
/// All four fields must be finite and >= 0 for the calculator to accept the
/// reading; violations raise [`AqiError::InvalidReading`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
}

impl PollutantReading {
    /// Build a validated reading.
    pub fn new(pm2_5: f64, pm10: f64, no2: f64, o3: f64) -> Result<Self, AqiError> {
        let reading = Self {
            pm2_5,
            pm10,
            no2,
            o3,
        };
        reading.validate()?;
        Ok(reading)
    }

    /// Concentration for one scored pollutant.
    pub fn concentration(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
        }
    }

    /// Reject non-finite or negative concentrations.
    ///
    /// Reports the first offending field in pollutant order.
    pub fn validate(&self) -> Result<(), AqiError> {
        for pollutant in Pollutant::ALL {
            let value = self.concentration(pollutant);
            if !value.is_finite() || value < 0.0 {
                return Err(AqiError::InvalidReading { pollutant, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading() {
        let reading = PollutantReading::new(12.0, 25.0, 40.0, 80.0).unwrap();
        assert_eq!(reading.concentration(Pollutant::Pm25), 12.0);
        assert_eq!(reading.concentration(Pollutant::O3), 80.0);
    }

    #[test]
    fn test_zero_reading_is_valid() {
        assert!(PollutantReading::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_negative_field_rejected() {
        let err = PollutantReading::new(-1.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            AqiError::InvalidReading {
                pollutant: Pollutant::Pm25,
                value: -1.0
            }
        );
    }

    #[test]
    fn test_nan_field_rejected() {
        let err = PollutantReading::new(1.0, f64::NAN, 0.0, 0.0).unwrap_err();
        match err {
            AqiError::InvalidReading { pollutant, value } => {
                assert_eq!(pollutant, Pollutant::Pm10);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_infinite_field_rejected() {
        let err = PollutantReading::new(1.0, 2.0, f64::INFINITY, 0.0).unwrap_err();
        assert_eq!(
            err,
            AqiError::InvalidReading {
                pollutant: Pollutant::No2,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_reference_ceilings() {
        assert_eq!(Pollutant::Pm25.reference_ceiling(), 25.0);
        assert_eq!(Pollutant::Pm10.reference_ceiling(), 50.0);
        assert_eq!(Pollutant::No2.reference_ceiling(), 200.0);
        assert_eq!(Pollutant::O3.reference_ceiling(), 180.0);
    }
}
