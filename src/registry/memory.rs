//! In-memory patient registry
//!
//! Backed by hash maps. The whole registry can be exported to and restored
//! from a JSON snapshot.

use super::PatientRegistry;
use crate::error::{IntakeError, Result};
use crate::models::patient::{PatientCorrection, PatientIntake};
use crate::models::triage::TriageRecord;
use crate::utils::log_rejection;
use chrono::{Local, NaiveDate};
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Registry held entirely in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryRegistry {
    patients: FxHashMap<String, PatientIntake>,
    triage_records: FxHashMap<String, Vec<TriageRecord>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered patients
    #[must_use]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Whether no patient is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Register a patient, validating against an explicit registration date
    pub fn register_on(
        &mut self,
        intake: PatientIntake,
        today: NaiveDate,
    ) -> Result<PatientIntake> {
        if let Err(e) = intake.validate(today) {
            log_rejection("registration", &e);
            return Err(e.into());
        }

        let key = normalize_id(&intake.national_id);
        if self.patients.contains_key(&key) {
            return Err(IntakeError::DuplicatePatient(key));
        }

        let mut stored = intake;
        stored.national_id.clone_from(&key);
        self.patients.insert(key.clone(), stored.clone());
        info!("Registered patient {key}");
        Ok(stored)
    }

    /// Serialize the registry to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a registry from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        info!("Restored registry with {} patients", registry.len());
        Ok(registry)
    }
}

fn normalize_id(national_id: &str) -> String {
    national_id.trim().to_string()
}

impl PatientRegistry for InMemoryRegistry {
    fn find(&self, national_id: &str) -> Option<PatientIntake> {
        self.patients.get(national_id.trim()).cloned()
    }

    fn register(&mut self, intake: PatientIntake) -> Result<PatientIntake> {
        self.register_on(intake, Local::now().date_naive())
    }

    fn correct(
        &mut self,
        national_id: &str,
        correction: &PatientCorrection,
    ) -> Result<PatientIntake> {
        let key = normalize_id(national_id);
        let current = self
            .patients
            .get(&key)
            .ok_or_else(|| IntakeError::PatientNotFound(key.clone()))?;

        let corrected = correction.apply(current);
        if let Err(e) = corrected.validate(Local::now().date_naive()) {
            log_rejection("correction", &e);
            return Err(e.into());
        }

        self.patients.insert(key.clone(), corrected.clone());
        info!("Corrected patient {key}");
        Ok(corrected)
    }

    fn record_triage(&mut self, national_id: &str, record: TriageRecord) -> Result<()> {
        let key = normalize_id(national_id);
        if !self.patients.contains_key(&key) {
            return Err(IntakeError::PatientNotFound(key));
        }

        info!("Stored triage record for {key}: {}", record.tier());
        self.triage_records.entry(key).or_default().push(record);
        Ok(())
    }

    fn triage_history(&self, national_id: &str) -> Result<Vec<TriageRecord>> {
        let key = normalize_id(national_id);
        if !self.patients.contains_key(&key) {
            return Err(IntakeError::PatientNotFound(key));
        }

        // Later insertions win ties on the timestamp
        let mut history: Vec<TriageRecord> = self
            .triage_records
            .get(&key)
            .map(|records| records.iter().rev().cloned().collect())
            .unwrap_or_default();
        history.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(history)
    }
}
