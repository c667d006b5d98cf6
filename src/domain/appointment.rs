//! Appointment domain model
//!
//! Appointments are created only by the registry, after it has checked the
//! doctor's availability and the scheduling rules.

use super::doctor::Doctor;
use super::ids::{LicenseNumber, PatientId};
use super::patient::Patient;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A booked appointment between a patient and a doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: Uuid,
    patient_id: PatientId,
    patient_name: String,
    doctor_license: LicenseNumber,
    doctor_name: String,
    timestamp: NaiveDateTime,
    specialty: String,
}

impl Appointment {
    pub(crate) fn new(
        patient: &Patient,
        doctor: &Doctor,
        timestamp: NaiveDateTime,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient.id().clone(),
            patient_name: patient.name().to_string(),
            doctor_license: doctor.license().clone(),
            doctor_name: doctor.name().to_string(),
            timestamp,
            specialty: specialty.into(),
        }
    }

    /// Unique appointment ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// ID of the booked patient
    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    /// Patient name at booking time
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// License of the attending doctor
    pub fn doctor_license(&self) -> &LicenseNumber {
        &self.doctor_license
    }

    /// Doctor name at booking time
    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    /// Date and time of the appointment (no time zone)
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Specialty the appointment was booked for
    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment: {} - {} - Patient: {} - Doctor: {}",
            self.timestamp.format("%d/%m/%Y %H:%M"),
            self.specialty,
            self.patient_name,
            self.doctor_name
        )
    }
}
