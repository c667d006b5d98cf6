//! Domain identifier types with validation
//!
//! Newtype wrappers for the two identity keys of the registry: a patient's
//! national ID and a doctor's license number. Keeping them as distinct types
//! stops a license number from being passed where a patient ID is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Patient identifier (national ID) newtype wrapper
///
/// # Examples
///
/// ```
/// use clinic::domain::ids::PatientId;
///
/// let id = PatientId::new("12345678").unwrap();
/// assert_eq!(id.as_str(), "12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId from a string
    ///
    /// Surrounding whitespace is kept as given; only blank IDs are rejected.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ID is empty or whitespace only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the patient ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PatientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Doctor license number newtype wrapper
///
/// # Examples
///
/// ```
/// use clinic::domain::ids::LicenseNumber;
///
/// let license: LicenseNumber = "MAT001".parse().unwrap();
/// assert_eq!(license.to_string(), "MAT001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LicenseNumber(String);

impl LicenseNumber {
    /// Creates a new LicenseNumber from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the license is empty or whitespace only
    pub fn new(license: impl Into<String>) -> Result<Self, String> {
        let license = license.into();
        if license.trim().is_empty() {
            return Err("License number cannot be empty".to_string());
        }
        Ok(Self(license))
    }

    /// Returns the license number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LicenseNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LicenseNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LicenseNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}
