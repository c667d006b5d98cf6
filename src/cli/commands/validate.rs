//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the clinic configuration file.

use crate::cli::commands::build_registry;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Unlike `shell` and `status`, a missing file is an error here.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Seed records must also pass the registry's own rules
        if let Err(e) = build_registry(&config, true) {
            println!("❌ Seed records were rejected");
            println!("   Error: {e}");
            println!();
            return Ok(2);
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Clinic: {}", config.clinic.name);
        println!("  Weekday Locale: {}", config.clinic.weekday_locale);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Shell Format: {:?}", config.shell.format);
        println!("  Pause After Action: {}", config.shell.pause_after_action);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!("  Seed Patients: {}", config.seed.patients.len());
        println!("  Seed Doctors: {}", config.seed.doctors.len());
        println!();
        Ok(0)
    }
}
