//! Domain error types
//!
//! This module defines the error hierarchy for the clinic registry.
//! Registry failures are a closed enum with structured fields so callers can
//! branch on the kind of failure instead of parsing message text.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which side of a patient/doctor pair an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A patient, keyed by national ID
    Patient,
    /// A doctor, keyed by license number
    Doctor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

/// Main clinic error type
///
/// This is the primary error type used throughout the crate. Registry
/// rejections are wrapped in [`ClinicError::Registry`]; the remaining variants
/// cover configuration, I/O and the ambient plumbing around the core.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Registry rule violations
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The shared registry lock was poisoned by a panicking holder
    #[error("Registry lock poisoned")]
    LockPoisoned,

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by registry operations
///
/// Every variant is locally recoverable: the caller reports it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A patient or doctor with this identifier is already registered
    #[error("a {role} with identifier {id} is already registered")]
    DuplicateIdentifier { role: Role, id: String },

    /// The referenced patient or doctor is not registered
    #[error("no {role} registered with identifier {id}")]
    NotFound { role: Role, id: String },

    /// The doctor does not offer the specialty on that weekday
    #[error("doctor {license} does not offer {specialty} on {weekday}")]
    SpecialtyUnavailable {
        license: String,
        specialty: String,
        weekday: String,
    },

    /// The doctor already has an appointment at exactly this time
    #[error("doctor {license} already has an appointment at {timestamp}")]
    SchedulingConflict {
        license: String,
        timestamp: NaiveDateTime,
    },

    /// A prescription was requested without any medication
    #[error("a prescription needs at least one medication")]
    EmptyMedicationList,
}

impl RegistryError {
    /// Short machine-friendly name of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::DuplicateIdentifier { .. } => "duplicate_identifier",
            RegistryError::NotFound { .. } => "not_found",
            RegistryError::SpecialtyUnavailable { .. } => "specialty_unavailable",
            RegistryError::SchedulingConflict { .. } => "scheduling_conflict",
            RegistryError::EmptyMedicationList => "empty_medication_list",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_clinic_error_display() {
        let err = ClinicError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_registry_error_conversion() {
        let registry_err = RegistryError::EmptyMedicationList;
        let clinic_err: ClinicError = registry_err.into();
        assert!(matches!(
            clinic_err,
            ClinicError::Registry(RegistryError::EmptyMedicationList)
        ));
    }

    #[test]
    fn test_not_found_display_names_role() {
        let err = RegistryError::NotFound {
            role: Role::Doctor,
            id: "MAT999".to_string(),
        };
        assert_eq!(err.to_string(), "no doctor registered with identifier MAT999");
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_scheduling_conflict_display() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let err = RegistryError::SchedulingConflict {
            license: "M1".to_string(),
            timestamp,
        };
        assert!(err.to_string().contains("2024-01-08 10:00:00"));
    }

    #[test]
    fn test_registry_error_kinds_are_distinct() {
        let errors = [
            RegistryError::DuplicateIdentifier {
                role: Role::Patient,
                id: "1".to_string(),
            },
            RegistryError::SpecialtyUnavailable {
                license: "M1".to_string(),
                specialty: "Cardiology".to_string(),
                weekday: "tuesday".to_string(),
            },
            RegistryError::EmptyMedicationList,
        ];
        let kinds: std::collections::HashSet<&str> =
            errors.iter().map(RegistryError::kind).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let clinic_err: ClinicError = io_err.into();
        assert!(matches!(clinic_err, ClinicError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let clinic_err: ClinicError = json_err.into();
        assert!(matches!(clinic_err, ClinicError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let clinic_err: ClinicError = toml_err.into();
        assert!(matches!(clinic_err, ClinicError::Configuration(_)));
        assert!(clinic_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_clinic_error_implements_std_error() {
        let err = ClinicError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
