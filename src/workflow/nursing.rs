//! Nursing assessment
//!
//! A nurse looks up a registered patient, types vital signs and notes, and
//! stores the scored result as a triage record.

use crate::algorithm::triage::TriageScorer;
use crate::error::{IntakeError, Result};
use crate::models::triage::TriageRecord;
use crate::models::vitals::{RawVitals, VitalSigns};
use crate::registry::PatientRegistry;
use crate::utils::log_rejection;
use chrono::{DateTime, Utc};
use log::info;

/// Default verifier recorded on nursing triage records
pub const DEFAULT_VERIFIER: &str = "Enfermería";

/// Temperature (°C) above which the "Fiebre" indicator is added
const FEVER_INDICATOR_ABOVE: f64 = 37.5;
/// Heart rate (bpm) above which the "Taquicardia" indicator is added
const TACHYCARDIA_INDICATOR_ABOVE: f64 = 100.0;
/// Saturation (%) below which the "Baja saturación" indicator is added
const LOW_SATURATION_INDICATOR_BELOW: f64 = 95.0;

/// Indicator labels summarising abnormal vitals, as stored on the record
#[must_use]
pub fn indicator_labels(vitals: &VitalSigns) -> Vec<String> {
    let mut labels = Vec::new();
    if let Some(pressure) = &vitals.blood_pressure {
        labels.push(format!("PA: {pressure}"));
    }
    if vitals.temperature.is_some_and(|t| t > FEVER_INDICATOR_ABOVE) {
        labels.push("Fiebre".to_string());
    }
    if vitals.heart_rate.is_some_and(|hr| hr > TACHYCARDIA_INDICATOR_ABOVE) {
        labels.push("Taquicardia".to_string());
    }
    if vitals
        .oxygen_saturation
        .is_some_and(|o| o < LOW_SATURATION_INDICATOR_BELOW)
    {
        labels.push("Baja saturación".to_string());
    }
    labels
}

/// Nursing station scoring against a shared scorer
#[derive(Debug, Clone)]
pub struct NursingAssessment<'a> {
    scorer: &'a TriageScorer,
    verified_by: String,
}

impl<'a> NursingAssessment<'a> {
    /// Create an assessment station
    #[must_use]
    pub fn new(scorer: &'a TriageScorer) -> Self {
        Self {
            scorer,
            verified_by: DEFAULT_VERIFIER.to_string(),
        }
    }

    /// Record a different verifier
    #[must_use]
    pub fn with_verifier(mut self, verified_by: impl Into<String>) -> Self {
        self.verified_by = verified_by.into();
        self
    }

    /// Score typed vitals and notes for a registered patient and store the record
    pub fn assess<R: PatientRegistry + ?Sized>(
        &self,
        registry: &mut R,
        national_id: &str,
        raw: &RawVitals,
        notes: Option<&str>,
        recorded_at: DateTime<Utc>,
    ) -> Result<TriageRecord> {
        if !registry.contains(national_id) {
            return Err(IntakeError::PatientNotFound(national_id.trim().to_string()));
        }

        let vitals = raw
            .parse(self.scorer.plausible_ranges())
            .inspect_err(|e| log_rejection("nursing", e))?;
        let symptoms = indicator_labels(&vitals);
        let notes = notes.map(str::trim).filter(|n| !n.is_empty());
        let result = self.scorer.score(&symptoms, Some(&vitals), notes)?;

        let record = TriageRecord {
            recorded_at,
            vitals,
            symptoms,
            notes: notes.map(str::to_string),
            result,
            verified_by: self.verified_by.clone(),
        };
        registry.record_triage(national_id, record.clone())?;
        info!(
            "Nursing assessment for {}: {} ({})",
            national_id.trim(),
            record.tier(),
            record.result.counts
        );
        Ok(record)
    }
}
