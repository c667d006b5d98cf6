//! Status command implementation
//!
//! This module implements the `status` command: it builds the registry a
//! shell session would start with and prints what it holds.

use crate::cli::commands::build_registry;
use crate::config::{load_config_or_default, ClinicConfig, OutputFormat};
use clap::Args;
use serde_json::json;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config_or_default(config_path) {
            Ok(config) => self.execute_with_config(&config).await,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                Ok(2) // Configuration error exit code
            }
        }
    }

    /// Execute the status command with an already loaded configuration
    pub async fn execute_with_config(&self, config: &ClinicConfig) -> anyhow::Result<i32> {
        tracing::info!("Checking registry status");

        let registry = match build_registry(config, true) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to load seed records");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let patients = registry.list_patients();
        let doctors = registry.list_doctors();

        if self.format.unwrap_or(config.shell.format) == OutputFormat::Json {
            let report = json!({
                "clinic": config.clinic.name,
                "weekday_locale": config.clinic.weekday_locale,
                "summary": registry.summary(),
                "patients": patients,
                "doctors": doctors,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(0);
        }

        println!("📊 {} Status", config.clinic.name);
        println!();
        println!("{}", registry.summary());
        println!();

        if patients.is_empty() && doctors.is_empty() {
            println!("No records registered.");
            println!("Add [[seed.patients]] or [[seed.doctors]] to the configuration file, or run 'clinic shell'.");
            return Ok(0);
        }

        println!("Patients:");
        if patients.is_empty() {
            println!("  (none)");
        }
        for patient in &patients {
            println!("  - {patient}");
        }

        println!();
        println!("Doctors:");
        if doctors.is_empty() {
            println!("  (none)");
        }
        for doctor in &doctors {
            println!("  - {doctor}");
        }
        println!();

        Ok(0)
    }
}
