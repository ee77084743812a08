//! Severity classes used by the triage scorer
//!
//! Every keyword, symptom label and vital-sign finding is sorted into one of
//! three severity classes; the scorer only ever looks at how many findings
//! fall into each class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity class of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth noting, but not urgent on its own (e.g., cough, dizziness)
    NonUrgent = 1,
    /// Needs prompt attention (e.g., high fever, vomiting)
    Urgent = 2,
    /// Potentially life-threatening (e.g., chest pain, breathing difficulty)
    Critical = 3,
}

impl Severity {
    /// All classes, most severe first
    pub const ALL: [Self; 3] = [Self::Critical, Self::Urgent, Self::NonUrgent];

    /// Get a descriptive name for this severity class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => "crítico",
            Self::Urgent => "urgente",
            Self::NonUrgent => "no urgente",
        }
    }

    /// Marker shown next to keyword hits
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Urgent => "🟡",
            Self::NonUrgent => "🟢",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Number of findings per severity class
///
/// All three counters are always present; a class without findings is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Critical findings
    pub critical: u32,
    /// Urgent findings
    pub urgent: u32,
    /// Non-urgent findings
    pub non_urgent: u32,
}

impl SeverityCounts {
    /// Record one finding of the given class
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Urgent => self.urgent += 1,
            Severity::NonUrgent => self.non_urgent += 1,
        }
    }

    /// Number of findings of the given class
    #[must_use]
    pub const fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Urgent => self.urgent,
            Severity::NonUrgent => self.non_urgent,
        }
    }

    /// Total number of findings
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.critical + self.urgent + self.non_urgent
    }
}

impl fmt::Display for SeverityCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "críticos: {}, urgentes: {}, no urgentes: {}",
            self.critical, self.urgent, self.non_urgent
        )
    }
}
