//! Configuration for the triage scorer.
//!
//! The keyword dictionary, the symptom label sets and every numeric threshold
//! are data, not code: a [`TriageConfig`] can be loaded from JSON and handed
//! to [`TriageScorer::new`](crate::algorithm::triage::TriageScorer::new).

use crate::algorithm::triage::keywords;
use crate::algorithm::triage::severity::Severity;
use crate::error::{IntakeError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One dictionary concept and its synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Canonical name of the concept
    pub concept: String,
    /// Severity class of every synonym
    pub severity: Severity,
    /// Terms matched in notes
    pub terms: Vec<String>,
}

/// Symptom labels recognised by exact match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomLabelSets {
    /// Labels counted as critical
    pub critical: Vec<String>,
    /// Labels counted as urgent
    pub urgent: Vec<String>,
    /// Labels counted as non-urgent
    pub non_urgent: Vec<String>,
}

impl SymptomLabelSets {
    /// Iterate over every label with its severity class
    pub fn iter(&self) -> impl Iterator<Item = (&str, Severity)> {
        tagged(&self.critical, Severity::Critical)
            .chain(tagged(&self.urgent, Severity::Urgent))
            .chain(tagged(&self.non_urgent, Severity::NonUrgent))
    }
}

fn tagged(labels: &[String], severity: Severity) -> impl Iterator<Item = (&str, Severity)> {
    labels.iter().map(move |label| (label.as_str(), severity))
}

impl Default for SymptomLabelSets {
    fn default() -> Self {
        let owned = |labels: &[&str]| -> Vec<String> {
            labels.iter().map(|l| (*l).to_string()).collect()
        };
        Self {
            critical: owned(&[
                "Dolor en el pecho",
                "Dificultad para respirar",
                "Pérdida de consciencia",
                "Pecho",
            ]),
            urgent: owned(&[
                "Fiebre",
                "Dolor abdominal",
                "Vómitos",
                "Taquicardia",
                "Baja saturación",
                "Abdomen",
            ]),
            non_urgent: owned(&[
                "Dolor de cabeza",
                "Mareos",
                "Náuseas",
                "Diarrea",
                "Dolor muscular",
                "Cabeza",
                "Espalda",
                "Extremidades",
            ]),
        }
    }
}

/// Cut-off values for the vital sign rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalThresholds {
    /// Temperature (°C) from which fever counts as urgent
    pub fever_urgent_from: f64,
    /// Temperature (°C) from which fever counts as non-urgent
    pub fever_mild_from: f64,
    /// Saturation (%) below which oxygenation is critical
    pub oxygen_critical_below: f64,
    /// Saturation (%) below which oxygenation is urgent
    pub oxygen_urgent_below: f64,
    /// Heart rate (bpm) above which tachycardia is urgent
    pub heart_rate_urgent_above: f64,
    /// Heart rate (bpm) from which tachycardia is non-urgent
    pub heart_rate_elevated_from: f64,
    /// Heart rate (bpm) below which bradycardia is urgent
    pub heart_rate_urgent_below: f64,
    /// Heart rate (bpm) below which bradycardia is non-urgent
    pub heart_rate_low_below: f64,
}

impl Default for VitalThresholds {
    fn default() -> Self {
        Self {
            fever_urgent_from: 39.0,
            fever_mild_from: 37.5,
            oxygen_critical_below: 90.0,
            oxygen_urgent_below: 95.0,
            heart_rate_urgent_above: 120.0,
            heart_rate_elevated_from: 100.0,
            heart_rate_urgent_below: 50.0,
            heart_rate_low_below: 60.0,
        }
    }
}

/// Inclusive range of accepted values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
}

impl ValueRange {
    /// Create a new range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Physiologically plausible ranges; anything outside is a typing error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibleRanges {
    /// Body temperature (°C)
    pub temperature: ValueRange,
    /// Oxygen saturation (%)
    pub oxygen_saturation: ValueRange,
    /// Heart rate (bpm)
    pub heart_rate: ValueRange,
}

impl Default for PlausibleRanges {
    fn default() -> Self {
        Self {
            temperature: ValueRange::new(30.0, 45.0),
            oxygen_saturation: ValueRange::new(0.0, 100.0),
            heart_rate: ValueRange::new(20.0, 300.0),
        }
    }
}

/// Configuration for the triage scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Keyword dictionary for free-text notes
    pub keywords: Vec<KeywordEntry>,
    /// Words never treated as keywords
    pub stopwords: Vec<String>,
    /// Tokens shorter than this are ignored
    pub min_token_chars: usize,
    /// Symptom labels matched exactly
    pub symptom_labels: SymptomLabelSets,
    /// Vital sign cut-offs
    pub thresholds: VitalThresholds,
    /// Accepted vital sign ranges
    pub plausible: PlausibleRanges,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            keywords: keywords::default_entries(),
            stopwords: keywords::default_stopwords(),
            min_token_chars: 3,
            symptom_labels: SymptomLabelSets::default(),
            thresholds: VitalThresholds::default(),
            plausible: PlausibleRanges::default(),
        }
    }
}

impl TriageConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        log::info!("Loaded triage configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_term(&self, concept: &str, key: &str, stopwords: &FxHashSet<String>) -> Result<()> {
        if key.is_empty() {
            return Err(IntakeError::Config(format!("empty term in concept '{concept}'")));
        }
        let tokens: Vec<String> = keywords::tokenize(key).collect();
        if tokens.len() != 1 || tokens[0] != key {
            return Err(IntakeError::Config(format!(
                "term '{key}' in concept '{concept}' is not a single word"
            )));
        }
        if key.chars().count() < self.min_token_chars {
            return Err(IntakeError::Config(format!(
                "term '{key}' in concept '{concept}' is shorter than {} characters",
                self.min_token_chars
            )));
        }
        if stopwords.contains(key) {
            return Err(IntakeError::Config(format!(
                "term '{key}' in concept '{concept}' is a stopword"
            )));
        }
        Ok(())
    }

    /// Check the configuration for contradictions
    ///
    /// Every term must be a single token that notes scanning can produce:
    /// no separators, at least `min_token_chars` long and not a stopword. A
    /// term belongs to one concept only, a label to one severity class only,
    /// and threshold pairs must be ordered so that every band is reachable.
    pub fn validate(&self) -> Result<()> {
        let stopwords: FxHashSet<String> = self
            .stopwords
            .iter()
            .map(|w| w.trim().to_lowercase())
            .collect();

        let mut terms: FxHashMap<String, &str> = FxHashMap::default();
        for entry in &self.keywords {
            for term in &entry.terms {
                let key = term.trim().to_lowercase();
                self.check_term(&entry.concept, &key, &stopwords)?;
                if let Some(previous) = terms.insert(key.clone(), &entry.concept) {
                    if previous != entry.concept {
                        return Err(IntakeError::Config(format!(
                            "term '{key}' is listed under both '{previous}' and '{}'",
                            entry.concept
                        )));
                    }
                }
            }
        }

        let mut labels: FxHashMap<&str, Severity> = FxHashMap::default();
        for (label, severity) in self.symptom_labels.iter() {
            if let Some(previous) = labels.insert(label.trim(), severity) {
                if previous != severity {
                    return Err(IntakeError::Config(format!(
                        "symptom label '{label}' is both {previous} and {severity}"
                    )));
                }
            }
        }

        let t = &self.thresholds;
        let ordered = [
            ("fever", t.fever_mild_from < t.fever_urgent_from),
            ("oxygen", t.oxygen_critical_below <= t.oxygen_urgent_below),
            (
                "heart rate",
                t.heart_rate_urgent_below <= t.heart_rate_low_below
                    && t.heart_rate_low_below <= t.heart_rate_elevated_from
                    && t.heart_rate_elevated_from <= t.heart_rate_urgent_above,
            ),
        ];
        if let Some((name, _)) = ordered.iter().find(|(_, ok)| !ok) {
            return Err(IntakeError::Config(format!(
                "{name} thresholds are out of order"
            )));
        }

        let p = &self.plausible;
        for (name, range) in [
            ("temperature", p.temperature),
            ("oxygen_saturation", p.oxygen_saturation),
            ("heart_rate", p.heart_rate),
        ] {
            if !(range.min <= range.max) {
                return Err(IntakeError::Config(format!(
                    "{name} range is empty: {}..={}",
                    range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
