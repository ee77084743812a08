//! Common domain type definitions
//!
//! This module contains the enum types shared by the intake models. Each
//! type converts leniently from the text a form would submit, and knows the
//! Spanish label shown to patients and staff.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as recorded at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Non-binary ("X" on the national ID)
    NonBinary,
    /// Other
    Other,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "masculino" => Self::Male,
            "f" | "female" | "femenino" => Self::Female,
            "x" => Self::NonBinary,
            "otro" | "other" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

/// ABO/Rh blood type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    /// A+
    APositive,
    /// A-
    ANegative,
    /// B+
    BPositive,
    /// B-
    BNegative,
    /// AB+
    AbPositive,
    /// AB-
    AbNegative,
    /// O+
    OPositive,
    /// O-
    ONegative,
    /// Not known
    #[default]
    Unknown,
}

impl BloodType {
    /// Conventional notation, e.g. "AB-"
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
            Self::Unknown => "No conocido",
        }
    }
}

impl From<&str> for BloodType {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A+" => Self::APositive,
            "A-" => Self::ANegative,
            "B+" => Self::BPositive,
            "B-" => Self::BNegative,
            "AB+" => Self::AbPositive,
            "AB-" => Self::AbNegative,
            "O+" | "0+" => Self::OPositive,
            "O-" | "0-" => Self::ONegative,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Self-reported pain intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PainLevel {
    /// No pain
    #[default]
    None,
    /// Mild
    Mild,
    /// Moderate
    Moderate,
    /// Severe
    Severe,
    /// Very severe
    VerySevere,
}

impl PainLevel {
    /// Label shown on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No hay dolor",
            Self::Mild => "Leve",
            Self::Moderate => "Moderado",
            Self::Severe => "Severo",
            Self::VerySevere => "Muy severo",
        }
    }
}

impl From<&str> for PainLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "leve" | "mild" | "1" => Self::Mild,
            "moderado" | "moderate" | "2" => Self::Moderate,
            "severo" | "severe" | "3" => Self::Severe,
            "muy severo" | "very severe" | "4" => Self::VerySevere,
            _ => Self::None,
        }
    }
}

/// Where the pain is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainLocation {
    /// Head
    Head,
    /// Chest
    Chest,
    /// Abdomen
    Abdomen,
    /// Back
    Back,
    /// Arms or legs
    Extremities,
}

impl PainLocation {
    /// Label shown on the form, also used as a symptom label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Head => "Cabeza",
            Self::Chest => "Pecho",
            Self::Abdomen => "Abdomen",
            Self::Back => "Espalda",
            Self::Extremities => "Extremidades",
        }
    }
}

/// How long the symptoms have been present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SymptomDuration {
    /// Less than one hour
    #[default]
    UnderAnHour,
    /// A few hours
    FewHours,
    /// About one day
    OneDay,
    /// Two to three days
    TwoToThreeDays,
    /// More than three days
    MoreThanThreeDays,
}

impl SymptomDuration {
    /// Label shown on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderAnHour => "Menos de 1 hora",
            Self::FewHours => "Algunas horas",
            Self::OneDay => "1 día",
            Self::TwoToThreeDays => "2-3 días",
            Self::MoreThanThreeDays => "Más de 3 días",
        }
    }
}
