//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use clinic::logging::init_logging;
//! use clinic::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a successful registry mutation
///
/// # Example
///
/// ```no_run
/// use clinic::log_registry_change;
///
/// let patient_id = "12345678";
/// log_registry_change!("register_patient", patient_id = %patient_id);
/// ```
#[macro_export]
macro_rules! log_registry_change {
    ($operation:expr, $($fields:tt)+) => {{
        tracing::info!(operation = $operation, $($fields)+, "Registry updated");
    }};
}

/// Log a rejected registry operation
///
/// # Example
///
/// ```no_run
/// use clinic::log_registry_rejection;
/// use clinic::domain::RegistryError;
///
/// let error = RegistryError::EmptyMedicationList;
/// log_registry_rejection!("issue_prescription", error);
/// ```
#[macro_export]
macro_rules! log_registry_rejection {
    ($operation:expr, $error:expr) => {{
        tracing::warn!(
            operation = $operation,
            kind = $error.kind(),
            error = %$error,
            "Registry operation rejected"
        );
    }};
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use clinic::log_error_with_context;
/// use clinic::domain::ClinicError;
///
/// let error = ClinicError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {{
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    }};
}
