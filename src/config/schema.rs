//! Configuration schema types
//!
//! This module defines the configuration structure that maps onto
//! `clinic.toml`.

use crate::domain::{LicenseNumber, PatientId, WeekdayLocale};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main clinic configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Clinic settings
    #[serde(default)]
    pub clinic: ClinicSettings,

    /// Interactive shell settings
    #[serde(default)]
    pub shell: ShellConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Records registered when a session starts
    #[serde(default)]
    pub seed: SeedConfig,
}

impl ClinicConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.clinic.validate()?;
        self.logging.validate()?;
        self.seed.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Clinic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicSettings {
    /// Clinic name shown in banners
    #[serde(default = "default_clinic_name")]
    pub name: String,

    /// Language of the weekday table used for bookings
    #[serde(default)]
    pub weekday_locale: WeekdayLocale,
}

impl Default for ClinicSettings {
    fn default() -> Self {
        Self {
            name: default_clinic_name(),
            weekday_locale: WeekdayLocale::default(),
        }
    }
}

impl ClinicSettings {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("clinic.name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// How the shell renders records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Output format for listings and histories
    #[serde(default)]
    pub format: OutputFormat,

    /// Wait for Enter after each action
    #[serde(default)]
    pub pause_after_action: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }
        Ok(())
    }
}

/// Records registered through the normal registry operations at start-up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Patients to register
    #[serde(default)]
    pub patients: Vec<SeedPatient>,

    /// Doctors to register, with their specialties
    #[serde(default)]
    pub doctors: Vec<SeedDoctor>,
}

/// A seeded patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPatient {
    /// National ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Birth date, kept as written
    #[serde(default)]
    pub birth_date: String,
}

/// A seeded doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDoctor {
    /// License number
    pub license: String,
    /// Display name
    pub name: String,
    /// Specialties in the order they are added
    #[serde(default)]
    pub specialties: Vec<SeedSpecialty>,
}

/// A seeded specialty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpecialty {
    /// Specialty type name
    pub kind: String,
    /// Day names it is offered on
    pub days: Vec<String>,
}

impl SeedConfig {
    /// True when there is nothing to seed
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.doctors.is_empty()
    }

    fn validate(&self) -> Result<(), String> {
        let mut patient_ids = HashSet::new();
        for patient in &self.patients {
            let id = PatientId::new(patient.id.as_str())
                .map_err(|e| format!("seed.patients: {e}"))?;
            if patient.name.trim().is_empty() {
                return Err(format!("seed.patients: patient {id} has an empty name"));
            }
            if !patient_ids.insert(id.clone()) {
                return Err(format!("seed.patients: duplicate patient ID {id}"));
            }
        }

        let mut licenses = HashSet::new();
        for doctor in &self.doctors {
            let license = LicenseNumber::new(doctor.license.as_str())
                .map_err(|e| format!("seed.doctors: {e}"))?;
            if doctor.name.trim().is_empty() {
                return Err(format!("seed.doctors: doctor {license} has an empty name"));
            }
            if !licenses.insert(license.clone()) {
                return Err(format!("seed.doctors: duplicate license {license}"));
            }
            for specialty in &doctor.specialties {
                if specialty.kind.trim().is_empty() {
                    return Err(format!(
                        "seed.doctors: doctor {license} has a specialty without a kind"
                    ));
                }
                if specialty.days.is_empty() {
                    return Err(format!(
                        "seed.doctors: specialty {} of doctor {license} has no days",
                        specialty.kind
                    ));
                }
            }
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_clinic_name() -> String {
    "Clinic".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
