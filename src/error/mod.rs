//! Error handling for the pre-triage intake library.

use std::io;

/// Input rejected before it can be scored or stored
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A vital sign field did not parse as a number
    #[error("{field} is not numeric: {value:?}")]
    NonNumeric {
        /// Name of the offending field
        field: &'static str,
        /// Raw text as supplied
        value: String,
    },

    /// A vital sign was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// A vital sign was outside its plausible physiological range
    #[error("{field} = {value} is outside the plausible range {min}..={max}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Supplied value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// A reported symptom label was empty or whitespace only
    #[error("symptom labels must not be blank")]
    BlankSymptom,

    /// A required intake field was missing
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Birth date lies after the registration date
    #[error("birth date lies in the future")]
    FutureBirthDate,
}

/// Specialized error type for intake operations
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No patient registered under the national ID
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// A patient with the national ID already exists
    #[error("Patient already registered: {0}")]
    DuplicatePatient(String),

    /// Wizard action not allowed from the current step
    #[error("Cannot {action} from step {from}")]
    InvalidTransition {
        /// Step the session was in
        from: &'static str,
        /// Attempted action
        action: &'static str,
    },

    /// Inconsistent triage configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading a configuration or snapshot file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;
