//! Registry seeding from configuration
//!
//! Seeded records go through the same registry operations as interactive
//! input, so every registry rule applies to them.

use crate::config::SeedConfig;
use crate::core::registry::Registry;
use crate::domain::{ClinicError, Doctor, Patient, Result, Specialty};

/// Counts of what a seed run registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    /// Patients registered
    pub patients: usize,
    /// Doctors registered
    pub doctors: usize,
    /// Specialties attached across all doctors
    pub specialties: usize,
}

/// Registers the seeded patients and doctors
///
/// Stops at the first record the registry rejects.
///
/// # Errors
///
/// Returns [`ClinicError::Validation`] for a malformed record and
/// [`ClinicError::Registry`] for a rejected one.
pub fn apply_seed(registry: &mut Registry, seed: &SeedConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for entry in &seed.patients {
        let patient = Patient::new(entry.id.as_str(), entry.name.as_str(), entry.birth_date.as_str())
            .map_err(ClinicError::Validation)?;
        registry.register_patient(patient)?;
        summary.patients += 1;
    }

    for entry in &seed.doctors {
        let mut doctor = Doctor::new(entry.name.as_str(), entry.license.as_str())
            .map_err(ClinicError::Validation)?;
        for specialty in &entry.specialties {
            if doctor.add_specialty(Specialty::new(specialty.kind.as_str(), &specialty.days)) {
                summary.specialties += 1;
            }
        }
        registry.register_doctor(doctor)?;
        summary.doctors += 1;
    }

    tracing::info!(
        patients = summary.patients,
        doctors = summary.doctors,
        specialties = summary.specialties,
        "Registry seeded"
    );
    Ok(summary)
}
