//! Vital sign measurements
//!
//! Nursing staff type vitals into free-text fields. [`RawVitals`] holds that
//! text; [`RawVitals::parse`] turns it into checked [`VitalSigns`] or reports
//! which field is wrong.

use crate::config::{PlausibleRanges, ValueRange};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Field name for body temperature
pub const TEMPERATURE: &str = "temperature";
/// Field name for oxygen saturation
pub const OXYGEN_SATURATION: &str = "oxygen_saturation";
/// Field name for heart rate
pub const HEART_RATE: &str = "heart_rate";

/// Measured vital signs; every field is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Blood pressure as written, e.g. "120/80"
    pub blood_pressure: Option<String>,
    /// Body temperature (°C)
    pub temperature: Option<f64>,
    /// Heart rate (bpm)
    pub heart_rate: Option<f64>,
    /// Oxygen saturation (%)
    pub oxygen_saturation: Option<f64>,
}

impl VitalSigns {
    /// Create an empty set of measurements
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blood pressure
    #[must_use]
    pub fn with_blood_pressure(mut self, pressure: impl Into<String>) -> Self {
        self.blood_pressure = Some(pressure.into());
        self
    }

    /// Set the temperature (°C)
    #[must_use]
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the heart rate (bpm)
    #[must_use]
    pub fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    /// Set the oxygen saturation (%)
    #[must_use]
    pub fn with_oxygen_saturation(mut self, percent: f64) -> Self {
        self.oxygen_saturation = Some(percent);
        self
    }

    /// Whether no measurement was taken
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blood_pressure.is_none()
            && self.temperature.is_none()
            && self.heart_rate.is_none()
            && self.oxygen_saturation.is_none()
    }

    /// Check every numeric measurement against its plausible range
    pub fn validate(&self, ranges: &PlausibleRanges) -> Result<(), ValidationError> {
        let measurements = [
            (TEMPERATURE, self.temperature, ranges.temperature),
            (OXYGEN_SATURATION, self.oxygen_saturation, ranges.oxygen_saturation),
            (HEART_RATE, self.heart_rate, ranges.heart_rate),
        ];
        for (field, value, range) in measurements {
            if let Some(value) = value {
                check_measurement(field, value, range)?;
            }
        }
        Ok(())
    }
}

/// Vital signs exactly as typed on the nursing form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVitals {
    /// Blood pressure text
    pub blood_pressure: String,
    /// Temperature text
    pub temperature: String,
    /// Heart rate text
    pub heart_rate: String,
    /// Oxygen saturation text
    pub oxygen_saturation: String,
}

impl RawVitals {
    /// Parse the typed values
    ///
    /// Empty fields become `None`. A decimal comma is accepted ("37,8").
    pub fn parse(&self, ranges: &PlausibleRanges) -> Result<VitalSigns, ValidationError> {
        let blood_pressure = self.blood_pressure.trim();
        Ok(VitalSigns {
            blood_pressure: (!blood_pressure.is_empty()).then(|| blood_pressure.to_string()),
            temperature: parse_measurement(TEMPERATURE, &self.temperature, ranges.temperature)?,
            heart_rate: parse_measurement(HEART_RATE, &self.heart_rate, ranges.heart_rate)?,
            oxygen_saturation: parse_measurement(
                OXYGEN_SATURATION,
                &self.oxygen_saturation,
                ranges.oxygen_saturation,
            )?,
        })
    }
}

fn parse_measurement(
    field: &'static str,
    raw: &str,
    range: ValueRange,
) -> Result<Option<f64>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: f64 = text
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::NonNumeric {
            field,
            value: raw.to_string(),
        })?;

    check_measurement(field, value, range).map(Some)
}

fn check_measurement(
    field: &'static str,
    value: f64,
    range: ValueRange,
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if !range.contains(value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(value)
}
