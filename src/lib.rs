//! A Rust library for hospital pre-triage intake: patient registration,
//! symptom scoring against a fixed rule table, and ticket summaries.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod utils;
pub mod workflow;

// Re-export the most common types for easier use
// Core types
pub use config::TriageConfig;
pub use error::{IntakeError, Result, ValidationError};

// Scoring
pub use algorithm::triage::severity::{Severity, SeverityCounts};
pub use algorithm::triage::{TriageScorer, default_scorer, score};

// Models
pub use models::{
    KeywordHit, PatientCorrection, PatientIntake, RawVitals, SymptomReport, Tier, TriageRecord,
    TriageResult, VitalSigns,
};

// Collaborators
pub use registry::{InMemoryRegistry, PatientRegistry};
pub use workflow::{NursingAssessment, Ticket, WizardStep};
