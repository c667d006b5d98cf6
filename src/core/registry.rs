//! The clinic registry
//!
//! The registry owns every patient, doctor, appointment and clinical history
//! and is the only place where they change. Each operation checks the
//! cross-entity rules before mutating anything, so a rejected call leaves the
//! registry exactly as it was:
//!
//! - patient IDs and doctor licenses are unique;
//! - a doctor never has two appointments at the exact same timestamp;
//! - an appointment is only booked when the doctor's first specialty covering
//!   that weekday is the one requested;
//! - every patient has exactly one clinical history, created on registration.
//!
//! Read accessors hand out owned snapshots, never references into the
//! registry's collections.

use crate::domain::{
    Appointment, ClinicalHistory, Doctor, LicenseNumber, Patient, PatientId, Prescription,
    RegistryError, Role, Specialty, WeekdayLocale,
};
use crate::{log_registry_change, log_registry_rejection};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Entity counts of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegistrySummary {
    /// Registered patients
    pub patients: usize,
    /// Registered doctors
    pub doctors: usize,
    /// Booked appointments
    pub appointments: usize,
    /// Issued prescriptions across all histories
    pub prescriptions: usize,
}

impl fmt::Display for RegistrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clinic - patients: {}, doctors: {}, appointments: {}",
            self.patients, self.doctors, self.appointments
        )
    }
}

/// Owner of all clinic records
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clinic::core::Registry;
/// use clinic::domain::{Doctor, Patient, Specialty};
///
/// let mut registry = Registry::new();
/// registry.register_patient(Patient::new("1", "Juan", "01/01/1990").unwrap()).unwrap();
/// registry
///     .register_doctor(
///         Doctor::new("López", "M1")
///             .unwrap()
///             .with_specialty(Specialty::new("Cardiology", ["monday"])),
///     )
///     .unwrap();
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let appointment = registry.book_appointment("1", "M1", "Cardiology", monday).unwrap();
/// assert_eq!(appointment.specialty(), "Cardiology");
/// assert_eq!(registry.history_for("1").unwrap().appointments().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    weekdays: WeekdayLocale,
    patients: Vec<Patient>,
    patient_index: HashMap<PatientId, usize>,
    doctors: Vec<Doctor>,
    doctor_index: HashMap<LicenseNumber, usize>,
    appointments: Vec<Appointment>,
    // Parallel to `patients`: histories[i] belongs to patients[i].
    histories: Vec<ClinicalHistory>,
}

impl Registry {
    /// Creates an empty registry using English weekday names
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry using the given weekday table
    pub fn with_weekdays(weekdays: WeekdayLocale) -> Self {
        Self {
            weekdays,
            ..Self::default()
        }
    }

    /// Weekday table used for bookings
    pub fn weekdays(&self) -> WeekdayLocale {
        self.weekdays
    }

    /// Registers a patient and opens their clinical history
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] if the ID is already registered.
    pub fn register_patient(&mut self, patient: Patient) -> RegistryResult<Patient> {
        if self.patient_index.contains_key(patient.id()) {
            let err = RegistryError::DuplicateIdentifier {
                role: Role::Patient,
                id: patient.id().to_string(),
            };
            log_registry_rejection!("register_patient", err);
            return Err(err);
        }

        let id = patient.id().clone();
        self.patient_index.insert(id.clone(), self.patients.len());
        self.histories
            .push(ClinicalHistory::new(id.clone(), patient.name()));
        self.patients.push(patient.clone());

        log_registry_change!("register_patient", patient_id = %id);
        Ok(patient)
    }

    /// Registers a doctor
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentifier`] if the license is already registered.
    pub fn register_doctor(&mut self, doctor: Doctor) -> RegistryResult<Doctor> {
        if self.doctor_index.contains_key(doctor.license()) {
            let err = RegistryError::DuplicateIdentifier {
                role: Role::Doctor,
                id: doctor.license().to_string(),
            };
            log_registry_rejection!("register_doctor", err);
            return Err(err);
        }

        let license = doctor.license().clone();
        self.doctor_index.insert(license.clone(), self.doctors.len());
        self.doctors.push(doctor.clone());

        log_registry_change!(
            "register_doctor",
            license = %license,
            specialties = doctor.specialties().len()
        );
        Ok(doctor)
    }

    /// Adds a specialty to an already registered doctor
    ///
    /// Returns `false` when the doctor already holds an equal specialty.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if the license is unknown.
    pub fn add_specialty(&mut self, license: &str, specialty: Specialty) -> RegistryResult<bool> {
        let index = match self.doctor_index.get(license) {
            Some(index) => *index,
            None => {
                let err = not_found(Role::Doctor, license);
                log_registry_rejection!("add_specialty", err);
                return Err(err);
            }
        };

        let kind = specialty.kind().to_string();
        let added = self.doctors[index].add_specialty(specialty);
        log_registry_change!("add_specialty", license = %license, specialty = %kind, added);
        Ok(added)
    }

    /// Books an appointment
    ///
    /// Checks, in order: the patient exists, the doctor exists, the doctor's
    /// specialty for the timestamp's weekday is exactly `specialty`, and the
    /// doctor has nothing booked at exactly `timestamp`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`], [`RegistryError::SpecialtyUnavailable`] or
    /// [`RegistryError::SchedulingConflict`].
    pub fn book_appointment(
        &mut self,
        patient_id: &str,
        license: &str,
        specialty: &str,
        timestamp: NaiveDateTime,
    ) -> RegistryResult<Appointment> {
        let (patient_index, doctor_index) = self
            .participants(patient_id, license)
            .inspect_err(|err| log_registry_rejection!("book_appointment", err))?;
        let doctor = &self.doctors[doctor_index];

        let weekday = self.weekdays.name_for(&timestamp);
        if doctor.specialty_for_weekday(weekday) != Some(specialty) {
            let err = RegistryError::SpecialtyUnavailable {
                license: license.to_string(),
                specialty: specialty.to_string(),
                weekday: weekday.to_string(),
            };
            log_registry_rejection!("book_appointment", err);
            return Err(err);
        }

        if !self.is_slot_free(license, timestamp) {
            let err = RegistryError::SchedulingConflict {
                license: license.to_string(),
                timestamp,
            };
            log_registry_rejection!("book_appointment", err);
            return Err(err);
        }

        let appointment = Appointment::new(
            &self.patients[patient_index],
            doctor,
            timestamp,
            specialty,
        );
        self.appointments.push(appointment.clone());
        self.histories[patient_index].record_appointment(appointment.clone());

        log_registry_change!(
            "book_appointment",
            appointment_id = %appointment.id(),
            patient_id = %patient_id,
            license = %license,
            specialty = %specialty,
            timestamp = %timestamp
        );
        Ok(appointment)
    }

    /// Issues a prescription and records it in the patient's history
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown patient or doctor, then
    /// [`RegistryError::EmptyMedicationList`] if `medications` is empty.
    pub fn issue_prescription(
        &mut self,
        patient_id: &str,
        license: &str,
        medications: &[String],
    ) -> RegistryResult<Prescription> {
        let (patient_index, doctor_index) = self
            .participants(patient_id, license)
            .inspect_err(|err| log_registry_rejection!("issue_prescription", err))?;

        if medications.is_empty() {
            let err = RegistryError::EmptyMedicationList;
            log_registry_rejection!("issue_prescription", err);
            return Err(err);
        }

        let prescription = Prescription::new(
            &self.patients[patient_index],
            &self.doctors[doctor_index],
            medications,
        );
        self.histories[patient_index].record_prescription(prescription.clone());

        log_registry_change!(
            "issue_prescription",
            prescription_id = %prescription.id(),
            patient_id = %patient_id,
            license = %license,
            medications = medications.len()
        );
        Ok(prescription)
    }

    /// Snapshot of a patient's clinical history
    pub fn history_for(&self, patient_id: &str) -> Option<ClinicalHistory> {
        self.patient_index
            .get(patient_id)
            .map(|index| self.histories[*index].clone())
    }

    /// Snapshot of all patients in registration order
    pub fn list_patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    /// Snapshot of all doctors in registration order
    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    /// Snapshot of all appointments in booking order
    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    /// Snapshot of the doctor with this license
    pub fn doctor_by_license(&self, license: &str) -> Option<Doctor> {
        self.doctor(license).cloned()
    }

    /// Whether a patient with this ID is registered
    pub fn has_patient(&self, patient_id: &str) -> bool {
        self.patient_index.contains_key(patient_id)
    }

    /// Whether a doctor with this license is registered
    pub fn has_doctor(&self, license: &str) -> bool {
        self.doctor_index.contains_key(license)
    }

    /// Whether the doctor has nothing booked at exactly `timestamp`
    pub fn is_slot_free(&self, license: &str, timestamp: NaiveDateTime) -> bool {
        !self
            .appointments
            .iter()
            .any(|a| a.doctor_license().as_str() == license && a.timestamp() == timestamp)
    }

    /// Weekday name of `timestamp` in this registry's weekday table
    pub fn weekday_name(&self, timestamp: NaiveDateTime) -> &'static str {
        self.weekdays.name_for(&timestamp)
    }

    /// Specialty the doctor offers on `weekday`, if the doctor exists and offers any
    pub fn specialty_available(&self, license: &str, weekday: &str) -> Option<String> {
        self.doctor(license)
            .and_then(|d| d.specialty_for_weekday(weekday))
            .map(str::to_string)
    }

    /// Whether a booking for `specialty` on `weekday` would pass the specialty check
    pub fn offers_specialty_on(&self, license: &str, specialty: &str, weekday: &str) -> bool {
        self.specialty_available(license, weekday).as_deref() == Some(specialty)
    }

    /// Entity counts
    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
            appointments: self.appointments.len(),
            prescriptions: self
                .histories
                .iter()
                .map(|h| h.prescriptions().len())
                .sum(),
        }
    }

    fn doctor(&self, license: &str) -> Option<&Doctor> {
        self.doctor_index
            .get(license)
            .map(|index| &self.doctors[*index])
    }

    /// Indices of the patient and the doctor, patient checked first
    fn participants(&self, patient_id: &str, license: &str) -> RegistryResult<(usize, usize)> {
        let patient = *self
            .patient_index
            .get(patient_id)
            .ok_or_else(|| not_found(Role::Patient, patient_id))?;
        let doctor = *self
            .doctor_index
            .get(license)
            .ok_or_else(|| not_found(Role::Doctor, license))?;
        Ok((patient, doctor))
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

fn not_found(role: Role, id: &str) -> RegistryError {
    RegistryError::NotFound {
        role,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn monday() -> NaiveDateTime {
        at(2024, 1, 8, 10, 0)
    }

    fn tuesday() -> NaiveDateTime {
        at(2024, 1, 9, 14, 0)
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register_patient(Patient::new("11111111", "Ana Torres", "20/03/1992").unwrap())
            .unwrap();
        registry
            .register_doctor(
                Doctor::new("Turno", "MAT004").unwrap().with_specialty(Specialty::new(
                    "Dermatology",
                    ["monday", "wednesday", "friday"],
                )),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_register_patients_and_doctors() {
        let mut registry = Registry::new();
        registry
            .register_patient(Patient::new("12345678", "Juan Pérez", "01/01/1990").unwrap())
            .unwrap();
        registry
            .register_patient(Patient::new("87654321", "María García", "15/05/1985").unwrap())
            .unwrap();
        registry
            .register_doctor(Doctor::new("López", "MAT001").unwrap())
            .unwrap();

        let patients = registry.list_patients();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].id().as_str(), "12345678");
        assert_eq!(patients[1].id().as_str(), "87654321");
        assert_eq!(registry.list_doctors().len(), 1);
    }

    #[test]
    fn test_duplicate_patient_id_is_rejected() {
        let mut registry = registry();
        let duplicate = Patient::new("11111111", "Someone Else", "02/02/1992").unwrap();

        let err = registry.register_patient(duplicate).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentifier {
                role: Role::Patient,
                id: "11111111".to_string(),
            }
        );
        assert_eq!(registry.list_patients()[0].name(), "Ana Torres");
    }

    #[test]
    fn test_duplicate_license_is_rejected() {
        let mut registry = registry();
        let err = registry
            .register_doctor(Doctor::new("Other Doctor", "MAT004").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateIdentifier {
                role: Role::Doctor,
                ..
            }
        ));
        assert_eq!(registry.list_doctors().len(), 1);
    }

    #[test]
    fn test_new_patient_has_empty_history() {
        let registry = registry();
        let history = registry.history_for("11111111").unwrap();
        assert!(history.appointments().is_empty());
        assert!(history.prescriptions().is_empty());
        assert!(registry.history_for("99999999").is_none());
    }

    #[test]
    fn test_book_appointment() {
        let mut registry = registry();
        let appointment = registry
            .book_appointment("11111111", "MAT004", "Dermatology", monday())
            .unwrap();

        assert_eq!(appointment.patient_id().as_str(), "11111111");
        assert_eq!(appointment.doctor_license().as_str(), "MAT004");
        assert_eq!(appointment.specialty(), "Dermatology");
        assert_eq!(appointment.timestamp(), monday());
        assert_eq!(registry.list_appointments(), vec![appointment.clone()]);
        assert_eq!(
            registry.history_for("11111111").unwrap().appointments(),
            [appointment]
        );
    }

    #[test]
    fn test_book_appointment_unknown_patient() {
        let mut registry = registry();
        let err = registry
            .book_appointment("99999999", "MAT004", "Dermatology", monday())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                role: Role::Patient,
                id: "99999999".to_string(),
            }
        );
    }

    #[test]
    fn test_book_appointment_unknown_doctor() {
        let mut registry = registry();
        let err = registry
            .book_appointment("11111111", "MAT999", "Dermatology", monday())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::NotFound {
                role: Role::Doctor,
                ..
            }
        ));
    }

    #[test]
    fn test_book_appointment_unknown_patient_checked_before_doctor() {
        let mut registry = registry();
        let err = registry
            .book_appointment("nobody", "nobody", "Dermatology", monday())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::NotFound {
                role: Role::Patient,
                ..
            }
        ));
    }

    #[test]
    fn test_book_appointment_wrong_specialty() {
        let mut registry = registry();
        let err = registry
            .book_appointment("11111111", "MAT004", "Cardiology", monday())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::SpecialtyUnavailable {
                license: "MAT004".to_string(),
                specialty: "Cardiology".to_string(),
                weekday: "monday".to_string(),
            }
        );
        assert!(registry.list_appointments().is_empty());
    }

    #[test]
    fn test_book_appointment_doctor_off_that_day() {
        let mut registry = registry();
        let err = registry
            .book_appointment("11111111", "MAT004", "Dermatology", tuesday())
            .unwrap_err();
        assert!(matches!(err, RegistryError::SpecialtyUnavailable { .. }));
    }

    #[test]
    fn test_specialty_match_is_exact() {
        let mut registry = registry();
        let err = registry
            .book_appointment("11111111", "MAT004", "dermatology", monday())
            .unwrap_err();
        assert!(matches!(err, RegistryError::SpecialtyUnavailable { .. }));
    }

    #[test]
    fn test_same_doctor_same_timestamp_conflicts() {
        let mut registry = registry();
        registry
            .register_patient(Patient::new("22222222", "Carlos Ruiz", "10/07/1988").unwrap())
            .unwrap();
        registry
            .book_appointment("11111111", "MAT004", "Dermatology", monday())
            .unwrap();

        let err = registry
            .book_appointment("22222222", "MAT004", "Dermatology", monday())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::SchedulingConflict {
                license: "MAT004".to_string(),
                timestamp: monday(),
            }
        );
        assert!(registry.history_for("22222222").unwrap().is_empty());
    }

    #[test]
    fn test_conflict_is_exact_timestamp_not_overlap() {
        let mut registry = registry();
        registry
            .book_appointment("11111111", "MAT004", "Dermatology", monday())
            .unwrap();
        registry
            .book_appointment("11111111", "MAT004", "Dermatology", at(2024, 1, 8, 10, 1))
            .unwrap();
        assert_eq!(registry.list_appointments().len(), 2);
    }

    #[test]
    fn test_first_specialty_for_a_day_shadows_later_ones() {
        let mut registry = registry();
        registry
            .add_specialty("MAT004", Specialty::new("Allergy", ["monday"]))
            .unwrap();

        let err = registry
            .book_appointment("11111111", "MAT004", "Allergy", monday())
            .unwrap_err();
        assert!(matches!(err, RegistryError::SpecialtyUnavailable { .. }));
    }

    #[test]
    fn test_add_specialty_to_registered_doctor() {
        let mut registry = registry();
        let neurology = Specialty::new("Neurology", ["tuesday"]);

        assert!(registry.add_specialty("MAT004", neurology.clone()).unwrap());
        assert!(!registry.add_specialty("MAT004", neurology).unwrap());
        assert_eq!(
            registry
                .doctor_by_license("MAT004")
                .unwrap()
                .specialties()
                .len(),
            2
        );

        registry
            .book_appointment("11111111", "MAT004", "Neurology", tuesday())
            .unwrap();
    }

    #[test]
    fn test_add_specialty_unknown_doctor() {
        let mut registry = registry();
        let err = registry
            .add_specialty("MAT999", Specialty::new("Neurology", ["tuesday"]))
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { role: Role::Doctor, .. }));
    }

    #[test]
    fn test_issue_prescription() {
        let mut registry = registry();
        let medications = vec!["A".to_string(), "B".to_string()];
        let prescription = registry
            .issue_prescription("11111111", "MAT004", &medications)
            .unwrap();

        assert_eq!(prescription.medications(), medications.as_slice());
        let history = registry.history_for("11111111").unwrap();
        assert_eq!(history.prescriptions(), [prescription]);
        assert!(history.appointments().is_empty());
        assert_eq!(registry.summary().prescriptions, 1);
    }

    #[test]
    fn test_issue_prescription_unknown_parties() {
        let mut registry = registry();
        let medications = vec!["A".to_string()];
        assert!(matches!(
            registry.issue_prescription("99999999", "MAT004", &medications),
            Err(RegistryError::NotFound { role: Role::Patient, .. })
        ));
        assert!(matches!(
            registry.issue_prescription("11111111", "MAT999", &medications),
            Err(RegistryError::NotFound { role: Role::Doctor, .. })
        ));
    }

    #[test]
    fn test_issue_prescription_without_medications() {
        let mut registry = registry();
        let err = registry
            .issue_prescription("11111111", "MAT004", &[])
            .unwrap_err();
        assert_eq!(err, RegistryError::EmptyMedicationList);
        assert!(registry.history_for("11111111").unwrap().is_empty());
    }

    #[test]
    fn test_snapshots_do_not_alias_registry_state() {
        let mut registry = registry();
        let mut doctor = registry.doctor_by_license("MAT004").unwrap();
        doctor.add_specialty(Specialty::new("Neurology", ["tuesday"]));

        assert_eq!(
            registry
                .doctor_by_license("MAT004")
                .unwrap()
                .specialties()
                .len(),
            1
        );
        assert!(registry
            .book_appointment("11111111", "MAT004", "Neurology", tuesday())
            .is_err());
    }

    #[test]
    fn test_validation_helpers() {
        let mut registry = registry();
        assert!(registry.has_patient("11111111"));
        assert!(!registry.has_patient("22222222"));
        assert!(registry.has_doctor("MAT004"));
        assert_eq!(registry.weekday_name(monday()), "monday");
        assert_eq!(
            registry.specialty_available("MAT004", "Wednesday").as_deref(),
            Some("Dermatology")
        );
        assert_eq!(registry.specialty_available("MAT004", "tuesday"), None);
        assert!(registry.offers_specialty_on("MAT004", "Dermatology", "friday"));
        assert!(!registry.offers_specialty_on("MAT999", "Dermatology", "friday"));

        assert!(registry.is_slot_free("MAT004", monday()));
        registry
            .book_appointment("11111111", "MAT004", "Dermatology", monday())
            .unwrap();
        assert!(!registry.is_slot_free("MAT004", monday()));
    }

    #[test]
    fn test_spanish_weekday_table() {
        let mut registry = Registry::with_weekdays(WeekdayLocale::Es);
        registry
            .register_patient(Patient::new("1", "Juan", "01/01/1990").unwrap())
            .unwrap();
        registry
            .register_doctor(
                Doctor::new("López", "M1")
                    .unwrap()
                    .with_specialty(Specialty::new("Cardiología", ["Lunes"])),
            )
            .unwrap();

        assert_eq!(registry.weekday_name(monday()), "lunes");
        registry
            .book_appointment("1", "M1", "Cardiología", monday())
            .unwrap();
    }

    #[test]
    fn test_summary_display() {
        let mut registry = registry();
        registry
            .book_appointment("11111111", "MAT004", "Dermatology", monday())
            .unwrap();
        assert_eq!(
            registry.to_string(),
            "Clinic - patients: 1, doctors: 1, appointments: 1"
        );
    }
}
