//! Configuration management for the clinic.
//!
//! # Overview
//!
//! The clinic uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINIC_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ClinicSettings`] - Clinic name and weekday table
//! - [`ShellConfig`] - Interactive shell output
//! - [`LoggingConfig`] - Local file logging
//! - [`SeedConfig`] - Patients and doctors registered at start-up
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [clinic]
//! name = "${CLINIC_NAME}"
//! weekday_locale = "en"
//!
//! [[seed.doctors]]
//! license = "M1"
//! name = "López"
//!
//! [[seed.doctors.specialties]]
//! kind = "Cardiology"
//! days = ["monday", "wednesday"]
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use clinic::config::load_config;
//!
//! # fn example() {
//! match load_config("clinic.toml") {
//!     Ok(config) => println!("Clinic: {}", config.clinic.name),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{
    ApplicationConfig, ClinicConfig, ClinicSettings, LoggingConfig, OutputFormat, SeedConfig,
    SeedDoctor, SeedPatient, SeedSpecialty, ShellConfig,
};
