//! Patient registry
//!
//! The registry stores registered patients keyed by national ID, together
//! with their nursing triage history. The scorer never touches it; the
//! intake workflow and the nursing assessment do.

pub mod memory;

use crate::error::Result;
use crate::models::patient::{PatientCorrection, PatientIntake};
use crate::models::triage::TriageRecord;

pub use memory::InMemoryRegistry;

/// Storage of registered patients and their triage records
pub trait PatientRegistry {
    /// Look up a patient by national ID
    fn find(&self, national_id: &str) -> Option<PatientIntake>;

    /// Register a new patient
    ///
    /// Fails when a required field is missing or the ID is already taken.
    fn register(&mut self, intake: PatientIntake) -> Result<PatientIntake>;

    /// Apply an administrative correction and return the corrected record
    fn correct(
        &mut self,
        national_id: &str,
        correction: &PatientCorrection,
    ) -> Result<PatientIntake>;

    /// Store a triage record for a registered patient
    fn record_triage(&mut self, national_id: &str, record: TriageRecord) -> Result<()>;

    /// Triage records of a patient, newest first
    fn triage_history(&self, national_id: &str) -> Result<Vec<TriageRecord>>;

    /// Whether a patient is registered under the ID
    fn contains(&self, national_id: &str) -> bool {
        self.find(national_id).is_some()
    }
}
