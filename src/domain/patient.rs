//! Patient domain model

use super::ids::PatientId;
use serde::Serialize;
use std::fmt;

/// A registered patient
///
/// The birth date is kept exactly as entered; no calendar arithmetic is ever
/// done on it.
///
/// # Examples
///
/// ```
/// use clinic::domain::Patient;
///
/// let patient = Patient::new("12345678", "Juan Pérez", "01/01/1990").unwrap();
/// assert_eq!(patient.id().as_str(), "12345678");
/// assert_eq!(patient.to_string(), "Patient: Juan Pérez (ID: 12345678)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    birth_date: String,
}

impl Patient {
    /// Creates a patient record
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or the name is blank
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Result<Self, String> {
        let id = PatientId::new(id)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Patient name cannot be empty".to_string());
        }

        Ok(Self {
            id,
            name,
            birth_date: birth_date.into(),
        })
    }

    /// National ID
    pub fn id(&self) -> &PatientId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Birth date as entered
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient: {} (ID: {})", self.name, self.id)
    }
}
