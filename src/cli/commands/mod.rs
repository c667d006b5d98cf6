//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod shell;
pub mod status;
pub mod validate;

use crate::config::ClinicConfig;
use crate::core::{apply_seed, Registry};
use crate::domain::Result;

/// Builds the registry a command works on, seeded from `config` when `seed` is set
pub(crate) fn build_registry(config: &ClinicConfig, seed: bool) -> Result<Registry> {
    let mut registry = Registry::with_weekdays(config.clinic.weekday_locale);
    if seed && !config.seed.is_empty() {
        apply_seed(&mut registry, &config.seed)?;
    }
    Ok(registry)
}
