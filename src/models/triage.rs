//! Triage outcome models
//!
//! A [`TriageResult`] is derived data: it is recomputed whenever its inputs
//! change and carries no identity of its own. A [`TriageRecord`] is the
//! nursing snapshot that is stored against a patient.

use crate::algorithm::triage::severity::{Severity, SeverityCounts};
use crate::models::vitals::VitalSigns;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier, [`Tier::Immediate`] being the most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Tier 1: immediate attention
    Immediate = 1,
    /// Tier 2: priority attention
    Priority = 2,
    /// Tier 3: preferred attention
    Preferred = 3,
    /// Tier 4: normal attention
    Normal = 4,
}

impl Tier {
    /// Tier number, 1 through 4
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Convert a tier number back into a tier
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Immediate),
            2 => Some(Self::Priority),
            3 => Some(Self::Preferred),
            4 => Some(Self::Normal),
            _ => None,
        }
    }

    /// Label printed on tickets
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "NIVEL 1 - ATENCIÓN INMEDIATA",
            Self::Priority => "NIVEL 2 - ATENCIÓN PRIORITARIA",
            Self::Preferred => "NIVEL 3 - ATENCIÓN PREFERENTE",
            Self::Normal => "NIVEL 4 - ATENCIÓN NORMAL",
        }
    }

    /// English description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Immediate => "immediate attention",
            Self::Priority => "priority attention",
            Self::Preferred => "preferred attention",
            Self::Normal => "normal attention",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dictionary term found in free-text notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// Term as it appeared (lower-cased)
    pub term: String,
    /// Canonical concept the term belongs to
    pub concept: String,
    /// Severity class of the concept
    pub severity: Severity,
}

impl fmt::Display for KeywordHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.term)
    }
}

/// Scored vital sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalSign {
    /// Body temperature
    Temperature,
    /// Oxygen saturation
    OxygenSaturation,
    /// Heart rate
    HeartRate,
}

/// An abnormal measurement and the class it was counted as
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalFinding {
    /// Which measurement
    pub sign: VitalSign,
    /// Measured value
    pub value: f64,
    /// Class it contributed to
    pub severity: Severity,
}

/// Outcome of scoring one triage pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Assigned tier
    pub tier: Tier,
    /// Keywords found in the notes, in reading order
    pub keyword_hits: Vec<KeywordHit>,
    /// Findings per severity class
    pub counts: SeverityCounts,
    /// Abnormal vital signs
    pub vital_findings: Vec<VitalFinding>,
}

impl TriageResult {
    /// Keyword hits joined for display, or "Sin coincidencias" when none
    #[must_use]
    pub fn keyword_summary(&self) -> String {
        if self.keyword_hits.is_empty() {
            "Sin coincidencias".to_string()
        } else {
            self.keyword_hits.iter().join(" | ")
        }
    }

    /// Keyword hits of one severity class
    pub fn hits_of(&self, severity: Severity) -> impl Iterator<Item = &KeywordHit> {
        self.keyword_hits
            .iter()
            .filter(move |hit| hit.severity == severity)
    }
}

/// Stored outcome of a nursing assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRecord {
    /// When the assessment was recorded
    pub recorded_at: DateTime<Utc>,
    /// Measured vitals
    pub vitals: VitalSigns,
    /// Indicator labels derived from the vitals
    pub symptoms: Vec<String>,
    /// Nursing notes
    pub notes: Option<String>,
    /// Scoring outcome
    pub result: TriageResult,
    /// Who verified the record
    pub verified_by: String,
}

impl TriageRecord {
    /// Assigned tier
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.result.tier
    }
}
