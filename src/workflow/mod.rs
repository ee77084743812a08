//! Intake workflow
//!
//! The steps around the scorer: the intake wizard, the nursing assessment
//! and the ticket handed to the patient.

pub mod nursing;
pub mod ticket;
pub mod wizard;

pub use nursing::NursingAssessment;
pub use ticket::Ticket;
pub use wizard::WizardStep;
