//! Clinical history
//!
//! One history exists per registered patient. It only ever grows; entries are
//! kept in the order they were created.

use super::appointment::Appointment;
use super::ids::PatientId;
use super::prescription::Prescription;
use serde::Serialize;
use std::fmt;

/// A patient's append-only log of appointments and prescriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicalHistory {
    patient_id: PatientId,
    patient_name: String,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
}

impl ClinicalHistory {
    pub(crate) fn new(patient_id: PatientId, patient_name: impl Into<String>) -> Self {
        Self {
            patient_id,
            patient_name: patient_name.into(),
            appointments: Vec::new(),
            prescriptions: Vec::new(),
        }
    }

    pub(crate) fn record_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub(crate) fn record_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.push(prescription);
    }

    /// Patient this history belongs to
    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    /// Patient display name
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Appointments in booking order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Prescriptions in issue order
    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty() && self.prescriptions.is_empty()
    }
}

impl fmt::Display for ClinicalHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clinical history of {} - appointments: {}, prescriptions: {}",
            self.patient_name,
            self.appointments.len(),
            self.prescriptions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Doctor, Patient};
    use chrono::NaiveDate;

    #[test]
    fn test_history_keeps_creation_order() {
        let patient = Patient::new("44444444", "Roberto Silva", "05/09/1980").unwrap();
        let doctor = Doctor::new("Historia", "MAT006").unwrap();
        let mut history = ClinicalHistory::new(patient.id().clone(), patient.name());
        assert!(history.is_empty());

        let first = NaiveDate::from_ymd_opt(2024, 2, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 2, 6)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        history.record_appointment(Appointment::new(&patient, &doctor, first, "General"));
        history.record_appointment(Appointment::new(&patient, &doctor, second, "General"));
        history.record_prescription(Prescription::new(&patient, &doctor, &["Aspirin".to_string()]));

        assert_eq!(history.appointments().len(), 2);
        assert_eq!(history.appointments()[0].timestamp(), first);
        assert_eq!(history.appointments()[1].timestamp(), second);
        assert_eq!(history.prescriptions().len(), 1);
        assert_eq!(
            history.to_string(),
            "Clinical history of Roberto Silva - appointments: 2, prescriptions: 1"
        );
    }
}
