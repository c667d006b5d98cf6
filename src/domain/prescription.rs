//! Prescription domain model

use super::doctor::Doctor;
use super::ids::{LicenseNumber, PatientId};
use super::patient::Patient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A prescription issued by a doctor to a patient
///
/// The issue time is taken when the prescription is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prescription {
    id: Uuid,
    patient_id: PatientId,
    patient_name: String,
    doctor_license: LicenseNumber,
    doctor_name: String,
    medications: Vec<String>,
    issued_at: DateTime<Utc>,
}

impl Prescription {
    pub(crate) fn new(patient: &Patient, doctor: &Doctor, medications: &[String]) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient.id().clone(),
            patient_name: patient.name().to_string(),
            doctor_license: doctor.license().clone(),
            doctor_name: doctor.name().to_string(),
            medications: medications.to_vec(),
            issued_at: Utc::now(),
        }
    }

    /// Unique prescription ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// ID of the patient the prescription was issued to
    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    /// Patient name at issue time
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// License of the prescribing doctor
    pub fn doctor_license(&self) -> &LicenseNumber {
        &self.doctor_license
    }

    /// Doctor name at issue time
    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    /// Medication names in the order they were given
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// When the prescription was issued
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription of {} - Patient: {} - Doctor: {} - Medications: {}",
            self.issued_at.format("%d/%m/%Y"),
            self.patient_name,
            self.doctor_name,
            self.medications.join(", ")
        )
    }
}
