// Clinic - Medical Clinic Registry
// Copyright (c) 2025 Clinic Contributors
// Licensed under the MIT License

//! # Clinic - Medical Clinic Registry
//!
//! An in-memory registry for a small medical clinic: patients, doctors and
//! their weekly specialties, appointments and prescriptions, with a clinical
//! history per patient. It is driven from an interactive terminal menu.
//!
//! ## Overview
//!
//! This library provides:
//! - **Registering** patients and doctors under unique identifiers
//! - **Booking** appointments when the doctor offers the requested specialty
//!   on that weekday and has nothing else at that exact time
//! - **Issuing** prescriptions
//! - **Recording** every appointment and prescription in the patient's
//!   clinical history
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and the interactive shell
//! - [`core`] - The registry and its rules
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use clinic::core::Registry;
//! use clinic::domain::{Doctor, Patient, Specialty};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = Registry::new();
//! registry.register_patient(Patient::new("1", "Juan", "01/01/1990")?)?;
//! registry.register_doctor(
//!     Doctor::new("López", "M1")?.with_specialty(Specialty::new("Cardiology", ["monday"])),
//! )?;
//!
//! // 8 January 2024 is a Monday
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 8)
//!     .and_then(|d| d.and_hms_opt(10, 0, 0))
//!     .ok_or("invalid date")?;
//! let appointment = registry.book_appointment("1", "M1", "Cardiology", monday)?;
//!
//! println!("{appointment}");
//! assert_eq!(registry.history_for("1").map(|h| h.appointments().len()), Some(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Registry operations fail with [`domain::RegistryError`]; everything else
//! uses [`domain::ClinicError`], which wraps it:
//!
//! ```rust
//! use clinic::core::Registry;
//! use clinic::domain::{ClinicError, RegistryError};
//!
//! fn prescribe(registry: &mut Registry) -> Result<(), ClinicError> {
//!     registry.issue_prescription("1", "M1", &["Ibuprofen".to_string()])?;
//!     Ok(())
//! }
//!
//! let err = prescribe(&mut Registry::new()).unwrap_err();
//! assert!(matches!(err, ClinicError::Registry(RegistryError::NotFound { .. })));
//! ```
//!
//! ## Logging
//!
//! Every registry change and rejection is logged with `tracing`; see
//! [`logging::init_logging`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
