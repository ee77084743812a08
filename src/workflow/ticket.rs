//! Attention ticket handed to the patient after pre-triage

use crate::models::patient::{PatientIntake, PatientSummary};
use crate::models::symptoms::SymptomReport;
use crate::models::triage::{Tier, TriageResult};
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symptoms printed on a ticket
pub const TOP_SYMPTOMS: usize = 3;

/// Diagnosis line before a physician has seen the patient
pub const PENDING_DIAGNOSIS: &str = "Pendiente de evaluación médica";

/// Printable summary of one pre-triage pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// When the ticket was issued
    pub issued_at: NaiveDateTime,
    /// Who the ticket is for
    pub patient: PatientSummary,
    /// Assigned tier
    pub tier: Tier,
    /// Leading symptoms
    pub top_symptoms: Vec<String>,
    /// Diagnosis line
    pub diagnosis: String,
}

impl Ticket {
    /// Build a ticket from a completed intake
    #[must_use]
    pub fn new(
        patient: &PatientIntake,
        report: &SymptomReport,
        result: &TriageResult,
        issued_at: NaiveDateTime,
    ) -> Self {
        Self {
            issued_at,
            patient: patient.summary(issued_at.date()),
            tier: result.tier,
            top_symptoms: report.top_symptoms(TOP_SYMPTOMS),
            diagnosis: PENDING_DIAGNOSIS.to_string(),
        }
    }

    /// Replace the diagnosis line
    #[must_use]
    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = diagnosis.into();
        self
    }

    /// Suggested file name for the rendered ticket
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("ticket_{}.txt", self.patient.national_id)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TICKET DE ATENCIÓN")?;
        writeln!(f, "Fecha: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Paciente: {}", self.patient.name)?;
        writeln!(f, "DNI: {}", self.patient.national_id)?;
        if let Some(age) = self.patient.age {
            writeln!(f, "Edad: {age}")?;
        }
        writeln!(f, "Nivel de Triaje: {}", self.tier)?;
        writeln!(f, "Síntomas principales: {}", self.top_symptoms.iter().join(", "))?;
        writeln!(f, "Diagnóstico: {}", self.diagnosis)?;
        writeln!(f)?;
        write!(f, "Por favor, espere a ser llamado")
    }
}
