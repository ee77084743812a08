//! Symptom report collected at the intake desk

use crate::algorithm::triage::TriageScorer;
use crate::error::ValidationError;
use crate::models::triage::TriageResult;
use crate::models::types::{PainLevel, PainLocation, SymptomDuration};
use crate::models::vitals::VitalSigns;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Symptoms reported during one triage pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    /// Labels reported directly, e.g. "Dolor abdominal"
    pub symptoms: Vec<String>,
    /// Pain intensity
    pub pain_level: PainLevel,
    /// Where it hurts
    pub pain_locations: Vec<PainLocation>,
    /// How long the symptoms have lasted
    pub duration: SymptomDuration,
    /// Fever
    pub fever: bool,
    /// Difficulty breathing
    pub breathing_difficulty: bool,
    /// Nausea or vomiting
    pub nausea: bool,
    /// Dizziness
    pub dizziness: bool,
    /// Diarrhea
    pub diarrhea: bool,
    /// Loss of consciousness
    pub loss_of_consciousness: bool,
    /// Pre-existing conditions, e.g. "Diabetes"
    pub conditions: Vec<String>,
    /// Free-text observations
    pub notes: Option<String>,
}

impl SymptomReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels handed to the scorer
    ///
    /// Flag labels come first, then pain locations, then directly reported
    /// labels; repeats keep their first position.
    #[must_use]
    pub fn active_symptoms(&self) -> Vec<String> {
        let flags = [
            (self.fever, "Fiebre"),
            (self.breathing_difficulty, "Dificultad para respirar"),
            (self.nausea, "Náuseas"),
            (self.dizziness, "Mareos"),
            (self.diarrhea, "Diarrea"),
            (self.loss_of_consciousness, "Pérdida de consciencia"),
        ];

        flags
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, label)| label.to_string())
            .chain(self.pain_locations.iter().map(|l| l.label().to_string()))
            .chain(self.symptoms.iter().map(|s| s.trim().to_string()))
            .unique()
            .collect()
    }

    /// First `n` active symptoms, as printed on the ticket
    #[must_use]
    pub fn top_symptoms(&self, n: usize) -> Vec<String> {
        self.active_symptoms().into_iter().take(n).collect()
    }

    /// Score this report together with its notes
    pub fn assess(
        &self,
        scorer: &TriageScorer,
        vitals: Option<&VitalSigns>,
    ) -> Result<TriageResult, ValidationError> {
        scorer.score(&self.active_symptoms(), vitals, self.notes.as_deref())
    }
}
