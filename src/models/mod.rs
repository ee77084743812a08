//! Domain models for the intake workflow
//!
//! Patients, symptom reports, vital signs and triage outcomes.

pub mod patient;
pub mod symptoms;
pub mod triage;
pub mod types;
pub mod vitals;

// Re-export commonly used types
pub use patient::{PatientCorrection, PatientIntake, PatientSummary};
pub use symptoms::SymptomReport;
pub use triage::{KeywordHit, Tier, TriageRecord, TriageResult, VitalFinding, VitalSign};
pub use types::{BloodType, Gender, PainLevel, PainLocation, SymptomDuration};
pub use vitals::{RawVitals, VitalSigns};
