//! Threshold rules for vital signs
//!
//! Each measurement is judged on its own and yields at most one finding.

use super::severity::Severity;
use crate::config::VitalThresholds;
use crate::models::triage::{VitalFinding, VitalSign};
use crate::models::vitals::VitalSigns;

/// Classify a body temperature in °C
#[must_use]
pub fn temperature_severity(celsius: f64, thresholds: &VitalThresholds) -> Option<Severity> {
    if celsius >= thresholds.fever_urgent_from {
        Some(Severity::Urgent)
    } else if celsius >= thresholds.fever_mild_from {
        Some(Severity::NonUrgent)
    } else {
        None
    }
}

/// Classify an oxygen saturation in %
#[must_use]
pub fn oxygen_severity(saturation: f64, thresholds: &VitalThresholds) -> Option<Severity> {
    if saturation < thresholds.oxygen_critical_below {
        Some(Severity::Critical)
    } else if saturation < thresholds.oxygen_urgent_below {
        Some(Severity::Urgent)
    } else {
        None
    }
}

/// Classify a heart rate in bpm
#[must_use]
pub fn heart_rate_severity(bpm: f64, thresholds: &VitalThresholds) -> Option<Severity> {
    if bpm > thresholds.heart_rate_urgent_above || bpm < thresholds.heart_rate_urgent_below {
        Some(Severity::Urgent)
    } else if bpm >= thresholds.heart_rate_elevated_from || bpm < thresholds.heart_rate_low_below {
        Some(Severity::NonUrgent)
    } else {
        None
    }
}

/// Apply all threshold rules, returning one finding per abnormal measurement
///
/// Blood pressure is free text and never scored.
#[must_use]
pub fn assess_vitals(vitals: &VitalSigns, thresholds: &VitalThresholds) -> Vec<VitalFinding> {
    let readings = [
        (
            VitalSign::Temperature,
            vitals
                .temperature
                .map(|v| (v, temperature_severity(v, thresholds))),
        ),
        (
            VitalSign::OxygenSaturation,
            vitals
                .oxygen_saturation
                .map(|v| (v, oxygen_severity(v, thresholds))),
        ),
        (
            VitalSign::HeartRate,
            vitals
                .heart_rate
                .map(|v| (v, heart_rate_severity(v, thresholds))),
        ),
    ];

    readings
        .into_iter()
        .filter_map(|(sign, reading)| {
            let (value, severity) = reading?;
            Some(VitalFinding {
                sign,
                value,
                severity: severity?,
            })
        })
        .collect()
}
