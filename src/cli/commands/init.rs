//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinic.toml")]
    pub output: String,

    /// Include seed records and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing clinic configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: clinic validate-config");
                println!("  3. Start the menu: clinic shell");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Clinic Configuration File

[application]
log_level = "info"

[clinic]
name = "Clinic"
weekday_locale = "en"

[shell]
format = "text"
pause_after_action = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with seed records and comments
    fn generate_config_with_examples() -> String {
        r#"# Clinic Configuration File
#
# Values of the form ${VAR} are replaced with environment variables before
# parsing. Any setting can also be overridden with CLINIC_<SECTION>_<KEY>,
# for example CLINIC_SHELL_FORMAT=json.

[application]
# Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
log_level = "info"

[clinic]
# Name shown in the menu banner, e.g. "${CLINIC_NAME}" to take it from the environment
name = "Clinic"

# Weekday names used to match bookings against specialty days: en | es
weekday_locale = "en"

[shell]
# Output of listings and histories: text | json
format = "text"

# Wait for Enter after each menu action
pause_after_action = false

[logging]
# JSON log files, rotated daily | hourly | never
local_enabled = false
local_path = "./logs"
local_rotation = "daily"

# Records registered when a session starts. They go through the same checks
# as records entered in the menu.

[[seed.patients]]
id = "12345678"
name = "Juan Pérez"
birth_date = "01/01/1990"

[[seed.patients]]
id = "87654321"
name = "Ana Gómez"
birth_date = "15/06/1985"

[[seed.doctors]]
license = "M1"
name = "López"

[[seed.doctors.specialties]]
kind = "Cardiology"
days = ["monday", "wednesday"]

[[seed.doctors.specialties]]
kind = "Internal Medicine"
days = ["friday"]

[[seed.doctors]]
license = "M2"
name = "Fernández"

[[seed.doctors.specialties]]
kind = "Pediatrics"
days = ["tuesday", "thursday"]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "clinic.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "clinic.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[clinic]"));
        assert!(config.contains("[shell]"));

        let parsed = parse_config(&config).unwrap();
        assert!(parsed.seed.is_empty());
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Clinic Configuration File"));
        assert!(config.contains("[[seed.doctors.specialties]]"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clinic.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[clinic]"));
    }
}
