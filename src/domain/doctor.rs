//! Doctor domain model

use super::ids::LicenseNumber;
use super::specialty::Specialty;
use serde::Serialize;
use std::fmt;

/// A doctor and the specialties they practice
///
/// Specialties are kept in insertion order. Lookups by weekday scan that
/// order and the first matching entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    license: LicenseNumber,
    name: String,
    specialties: Vec<Specialty>,
}

impl Doctor {
    /// Creates a doctor with no specialties
    ///
    /// # Errors
    ///
    /// Returns an error if the name or the license number is blank
    pub fn new(name: impl Into<String>, license: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Doctor name cannot be empty".to_string());
        }

        Ok(Self {
            license: LicenseNumber::new(license)?,
            name,
            specialties: Vec::new(),
        })
    }

    /// Adds a specialty unless an equal one is already held
    ///
    /// Returns `true` when the specialty was appended.
    pub fn add_specialty(&mut self, specialty: Specialty) -> bool {
        if self.specialties.contains(&specialty) {
            return false;
        }
        self.specialties.push(specialty);
        true
    }

    /// Builder-style variant of [`Doctor::add_specialty`]
    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.add_specialty(specialty);
        self
    }

    /// Type name of the first specialty offered on `day`, if any
    pub fn specialty_for_weekday(&self, day: &str) -> Option<&str> {
        self.specialties
            .iter()
            .find(|s| s.offers_on(day))
            .map(Specialty::kind)
    }

    /// License number
    pub fn license(&self) -> &LicenseNumber {
        &self.license
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Specialties in insertion order
    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.specialties.iter().map(Specialty::kind).collect();
        write!(
            f,
            "Dr. {} (license: {}) - specialties: {}",
            self.name,
            self.license,
            kinds.join(", ")
        )
    }
}
