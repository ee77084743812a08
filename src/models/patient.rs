//! Patient intake model
//!
//! A [`PatientIntake`] is created once at registration. After that it only
//! changes through an explicit [`PatientCorrection`], which re-validates the
//! record.

use crate::error::ValidationError;
use crate::models::types::{BloodType, Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifying data of a registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIntake {
    /// National identity document number (DNI or foreign ID)
    pub national_id: String,
    /// Full name
    pub name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Contact phone
    pub phone: Option<String>,
    /// Home address
    pub address: Option<String>,
    /// Gender
    pub gender: Gender,
    /// Blood type
    pub blood_type: BloodType,
    /// Tax/insurance number (CUIT)
    pub tax_id: Option<String>,
    /// Nationality
    pub nationality: Option<String>,
}

impl PatientIntake {
    /// Create a new intake with the required fields only
    #[must_use]
    pub fn new(
        national_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            national_id: national_id.into().trim().to_string(),
            name: name.into().trim().to_string(),
            birth_date,
            phone: None,
            address: None,
            gender: Gender::Unknown,
            blood_type: BloodType::Unknown,
            tax_id: None,
            nationality: None,
        }
    }

    /// Set the contact phone
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    /// Set the home address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = non_blank(address.into());
        self
    }

    /// Set the gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the blood type
    #[must_use]
    pub fn with_blood_type(mut self, blood_type: BloodType) -> Self {
        self.blood_type = blood_type;
        self
    }

    /// Set the tax/insurance number
    #[must_use]
    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = non_blank(tax_id.into());
        self
    }

    /// Set the nationality
    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = non_blank(nationality.into());
        self
    }

    /// Check required fields against the registration date
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.national_id.trim().is_empty() {
            return Err(ValidationError::MissingField("national_id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.birth_date > today {
            return Err(ValidationError::FutureBirthDate);
        }
        Ok(())
    }

    /// Age in completed years on `date`
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        date.years_since(self.birth_date)
    }

    /// Short summary for tickets and lists
    #[must_use]
    pub fn summary(&self, on: NaiveDate) -> PatientSummary {
        PatientSummary {
            national_id: self.national_id.clone(),
            name: self.name.clone(),
            age: self.age_on(on),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Identifying subset of a patient shown on tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    /// National ID
    pub national_id: String,
    /// Full name
    pub name: String,
    /// Age in years, if the birth date is not after the reference date
    pub age: Option<u32>,
}

/// Administrative correction of a registered patient
///
/// Only the fields set to `Some` change. The national ID is the registry key
/// and cannot be corrected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientCorrection {
    /// Corrected name
    pub name: Option<String>,
    /// Corrected birth date
    pub birth_date: Option<NaiveDate>,
    /// Corrected phone
    pub phone: Option<String>,
    /// Corrected address
    pub address: Option<String>,
    /// Corrected gender
    pub gender: Option<Gender>,
    /// Corrected blood type
    pub blood_type: Option<BloodType>,
    /// Corrected tax/insurance number
    pub tax_id: Option<String>,
    /// Corrected nationality
    pub nationality: Option<String>,
}

impl PatientCorrection {
    /// Whether the correction changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the corrected record, leaving `intake` untouched
    #[must_use]
    pub fn apply(&self, intake: &PatientIntake) -> PatientIntake {
        let mut corrected = intake.clone();
        if let Some(name) = &self.name {
            corrected.name = name.trim().to_string();
        }
        if let Some(birth_date) = self.birth_date {
            corrected.birth_date = birth_date;
        }
        if let Some(phone) = &self.phone {
            corrected.phone = non_blank(phone.clone());
        }
        if let Some(address) = &self.address {
            corrected.address = non_blank(address.clone());
        }
        if let Some(gender) = self.gender {
            corrected.gender = gender;
        }
        if let Some(blood_type) = self.blood_type {
            corrected.blood_type = blood_type;
        }
        if let Some(tax_id) = &self.tax_id {
            corrected.tax_id = non_blank(tax_id.clone());
        }
        if let Some(nationality) = &self.nationality {
            corrected.nationality = non_blank(nationality.clone());
        }
        corrected
    }
}
