//! Core business logic for the clinic.
//!
//! # Modules
//!
//! - [`registry`] - The registry that owns all records and enforces the rules
//! - [`shared`] - A lock-guarded handle for hosts with more than one thread
//! - [`seed`] - Registering configured records at start-up
//!
//! # Example
//!
//! ```rust
//! use clinic::core::Registry;
//! use clinic::domain::{Doctor, Patient, RegistryError};
//!
//! let mut registry = Registry::new();
//! registry.register_patient(Patient::new("1", "Juan", "01/01/1990").unwrap()).unwrap();
//! registry.register_doctor(Doctor::new("López", "M1").unwrap()).unwrap();
//!
//! let err = registry
//!     .issue_prescription("1", "M1", &[])
//!     .unwrap_err();
//! assert_eq!(err, RegistryError::EmptyMedicationList);
//! ```

pub mod registry;
pub mod seed;
pub mod shared;

pub use registry::{Registry, RegistrySummary};
pub use seed::{apply_seed, SeedSummary};
pub use shared::SharedRegistry;
