//! Triage scoring
//!
//! This module turns reported symptoms, optional vital signs and optional
//! free-text notes into one of four urgency tiers. Every input contributes
//! findings to three severity counters; a fixed decision table then maps the
//! counters to a tier.

pub mod keywords;
pub mod rules;
pub mod severity;
pub mod vitals;

use crate::config::{PlausibleRanges, TriageConfig, VitalThresholds};
use crate::error::{Result, ValidationError};
use crate::models::triage::TriageResult;
use crate::models::vitals::VitalSigns;
use keywords::KeywordDictionary;
use log::debug;
use rustc_hash::FxHashMap;
use severity::{Severity, SeverityCounts};
use std::sync::OnceLock;

/// Scorer compiled from a [`TriageConfig`]
///
/// Immutable once built; one instance can score any number of patients,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct TriageScorer {
    dictionary: KeywordDictionary,
    symptom_labels: FxHashMap<String, Severity>,
    thresholds: VitalThresholds,
    plausible: PlausibleRanges,
}

impl TriageScorer {
    /// Validate a configuration and compile it into a scorer
    pub fn new(config: &TriageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::compile(config))
    }

    fn compile(config: &TriageConfig) -> Self {
        let symptom_labels = config
            .symptom_labels
            .iter()
            .map(|(label, severity)| (label.trim().to_string(), severity))
            .collect();

        Self {
            dictionary: KeywordDictionary::from_config(config),
            symptom_labels,
            thresholds: config.thresholds.clone(),
            plausible: config.plausible.clone(),
        }
    }

    /// Keyword dictionary used for notes
    #[must_use]
    pub const fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    /// Ranges vital signs must fall into
    #[must_use]
    pub const fn plausible_ranges(&self) -> &PlausibleRanges {
        &self.plausible
    }

    /// Severity of a reported symptom label (exact match)
    #[must_use]
    pub fn classify_symptom(&self, label: &str) -> Option<Severity> {
        self.symptom_labels.get(label.trim()).copied()
    }

    /// Score one triage pass
    ///
    /// Input is validated in full before anything is counted, so a rejected
    /// call has no partial outcome.
    pub fn score<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        vitals: Option<&VitalSigns>,
        notes: Option<&str>,
    ) -> std::result::Result<TriageResult, ValidationError> {
        if symptoms.iter().any(|s| s.as_ref().trim().is_empty()) {
            return Err(ValidationError::BlankSymptom);
        }
        if let Some(vitals) = vitals {
            vitals.validate(&self.plausible)?;
        }

        let mut counts = SeverityCounts::default();

        let keyword_hits = notes
            .map(|text| self.dictionary.scan(text))
            .unwrap_or_default();
        for hit in &keyword_hits {
            counts.add(hit.severity);
        }

        for label in symptoms {
            if let Some(severity) = self.classify_symptom(label.as_ref()) {
                counts.add(severity);
            }
        }

        let vital_findings = vitals
            .map(|v| vitals::assess_vitals(v, &self.thresholds))
            .unwrap_or_default();
        for finding in &vital_findings {
            counts.add(finding.severity);
        }

        let tier = rules::decide_tier(&counts);
        debug!(
            "Scored {} symptoms, {} keyword hits, {} vital findings ({}) -> {}",
            symptoms.len(),
            keyword_hits.len(),
            vital_findings.len(),
            counts,
            tier
        );

        Ok(TriageResult {
            tier,
            keyword_hits,
            counts,
            vital_findings,
        })
    }
}

impl Default for TriageScorer {
    fn default() -> Self {
        Self::compile(&TriageConfig::default())
    }
}

/// Process-wide scorer built from the default configuration
pub fn default_scorer() -> &'static TriageScorer {
    static SCORER: OnceLock<TriageScorer> = OnceLock::new();
    SCORER.get_or_init(TriageScorer::default)
}

/// Score with the default configuration
pub fn score<S: AsRef<str>>(
    symptoms: &[S],
    vitals: Option<&VitalSigns>,
    notes: Option<&str>,
) -> std::result::Result<TriageResult, ValidationError> {
    default_scorer().score(symptoms, vitals, notes)
}
