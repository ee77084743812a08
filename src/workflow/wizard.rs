//! Intake wizard state
//!
//! The wizard is a linear sequence of steps. The current step, and the data
//! gathered so far, live in a [`WizardStep`] value owned by the caller;
//! every transition is a method that either advances the value or fails and
//! leaves it unchanged.

use crate::algorithm::triage::TriageScorer;
use crate::error::{IntakeError, Result};
use crate::models::patient::PatientIntake;
use crate::models::symptoms::SymptomReport;
use crate::models::triage::{Tier, TriageResult};
use crate::models::vitals::VitalSigns;
use crate::workflow::ticket::Ticket;
use chrono::NaiveDateTime;
use log::info;

/// Current step of an intake, carrying the data collected so far
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WizardStep {
    /// Welcome page
    #[default]
    Start,
    /// Looking up or registering the patient
    Registration,
    /// Collecting symptoms for a registered patient
    Symptoms {
        /// Registered patient
        patient: PatientIntake,
    },
    /// Triage complete, ticket ready to print
    Ticket {
        /// Registered patient
        patient: PatientIntake,
        /// Submitted symptoms
        report: SymptomReport,
        /// Scoring outcome
        result: TriageResult,
    },
}

impl WizardStep {
    /// Create a wizard at the start page
    #[must_use]
    pub fn new() -> Self {
        Self::Start
    }

    /// Name of the step
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Registration => "registration",
            Self::Symptoms { .. } => "symptoms",
            Self::Ticket { .. } => "ticket",
        }
    }

    /// Position in the progress bar, 0 through 3
    #[must_use]
    pub const fn progress(&self) -> usize {
        match self {
            Self::Start => 0,
            Self::Registration => 1,
            Self::Symptoms { .. } => 2,
            Self::Ticket { .. } => 3,
        }
    }

    /// Patient of the intake, once registered
    #[must_use]
    pub const fn patient(&self) -> Option<&PatientIntake> {
        match self {
            Self::Symptoms { patient } | Self::Ticket { patient, .. } => Some(patient),
            Self::Start | Self::Registration => None,
        }
    }

    /// Scoring outcome, once symptoms were submitted
    #[must_use]
    pub const fn triage_result(&self) -> Option<&TriageResult> {
        match self {
            Self::Ticket { result, .. } => Some(result),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> IntakeError {
        IntakeError::InvalidTransition {
            from: self.name(),
            action,
        }
    }

    fn advance(&mut self, next: Self) {
        info!("Intake wizard: {} -> {}", self.name(), next.name());
        *self = next;
    }

    /// Start → Registration
    pub fn begin(&mut self) -> Result<()> {
        match self {
            Self::Start => {
                self.advance(Self::Registration);
                Ok(())
            }
            _ => Err(self.invalid("begin")),
        }
    }

    /// Registration → Symptoms, with the registered patient
    pub fn register(&mut self, patient: PatientIntake) -> Result<()> {
        match self {
            Self::Registration => {
                self.advance(Self::Symptoms { patient });
                Ok(())
            }
            _ => Err(self.invalid("register")),
        }
    }

    /// Symptoms → Ticket, scoring the report
    ///
    /// On a validation error the wizard stays on the symptoms step.
    pub fn submit_symptoms(
        &mut self,
        scorer: &TriageScorer,
        report: SymptomReport,
        vitals: Option<&VitalSigns>,
    ) -> Result<Tier> {
        let Self::Symptoms { patient } = self else {
            return Err(self.invalid("submit symptoms"));
        };

        let result = report.assess(scorer, vitals)?;
        let tier = result.tier;
        let patient = patient.clone();
        self.advance(Self::Ticket {
            patient,
            report,
            result,
        });
        Ok(tier)
    }

    /// Ticket for the completed intake
    pub fn ticket(&self, issued_at: NaiveDateTime) -> Result<Ticket> {
        match self {
            Self::Ticket {
                patient,
                report,
                result,
            } => Ok(Ticket::new(patient, report, result, issued_at)),
            _ => Err(self.invalid("print a ticket")),
        }
    }

    /// Ticket → Start, discarding the intake data
    pub fn finish(&mut self) -> Result<()> {
        match self {
            Self::Ticket { .. } => {
                self.advance(Self::Start);
                Ok(())
            }
            _ => Err(self.invalid("finish")),
        }
    }

    /// Back to Start from anywhere, discarding the intake data
    pub fn reset(&mut self) {
        self.advance(Self::Start);
    }
}
