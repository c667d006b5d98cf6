//! Domain models and types for the clinic.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`LicenseNumber`])
//! - **Entities and values** ([`Patient`], [`Doctor`], [`Specialty`],
//!   [`Appointment`], [`Prescription`], [`ClinicalHistory`])
//! - **Weekday tables** ([`WeekdayLocale`])
//! - **Error types** ([`ClinicError`], [`RegistryError`], [`Role`])
//! - **Result type alias** ([`Result`])
//!
//! # Construction
//!
//! Patients, doctors and specialties are built by the caller and handed to
//! the [`Registry`](crate::core::Registry). Appointments, prescriptions and
//! histories are only ever produced by the registry, so they have no public
//! constructors.
//!
//! ```rust
//! use clinic::domain::{Doctor, Patient, Specialty};
//!
//! # fn example() -> Result<(), String> {
//! let patient = Patient::new("1", "Juan", "01/01/1990")?;
//! let doctor = Doctor::new("López", "M1")?
//!     .with_specialty(Specialty::new("Cardiology", ["monday"]));
//! # Ok(())
//! # }
//! ```

pub mod appointment;
pub mod doctor;
pub mod errors;
pub mod history;
pub mod ids;
pub mod patient;
pub mod prescription;
pub mod result;
pub mod specialty;
pub mod weekday;

// Re-export commonly used types for convenience
pub use appointment::Appointment;
pub use doctor::Doctor;
pub use errors::{ClinicError, RegistryError, Role};
pub use history::ClinicalHistory;
pub use ids::{LicenseNumber, PatientId};
pub use patient::Patient;
pub use prescription::Prescription;
pub use result::Result;
pub use specialty::Specialty;
pub use weekday::WeekdayLocale;
