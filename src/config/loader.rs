//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ClinicConfig, OutputFormat};
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClinicConfig
/// 4. Applies environment variable overrides (CLINIC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use clinic::config::loader::load_config;
///
/// let config = load_config("clinic.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// The shell and status commands work without any configuration file; an
/// existing file that fails to load is still an error. Environment overrides
/// apply to the defaults as well.
///
/// # Errors
///
/// Same as [`load_config`] for an existing file.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = ClinicConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Parses and validates configuration text
///
/// # Errors
///
/// Returns an error on missing environment variables, TOML syntax errors or
/// invalid values.
pub fn parse_config(contents: &str) -> Result<ClinicConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ClinicConfig = toml::from_str(&contents)
        .map_err(|e| ClinicError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Placeholders in comments are left alone
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CLINIC_* prefix
///
/// Environment variables follow the pattern: CLINIC_<SECTION>_<KEY>
/// For example: CLINIC_APPLICATION_LOG_LEVEL, CLINIC_CLINIC_WEEKDAY_LOCALE
fn apply_env_overrides(config: &mut ClinicConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CLINIC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Clinic overrides
    if let Ok(val) = std::env::var("CLINIC_CLINIC_NAME") {
        config.clinic.name = val;
    }
    if let Ok(val) = std::env::var("CLINIC_CLINIC_WEEKDAY_LOCALE") {
        config.clinic.weekday_locale = val.parse().map_err(ClinicError::Configuration)?;
    }

    // Shell overrides
    if let Ok(val) = std::env::var("CLINIC_SHELL_FORMAT") {
        config.shell.format = match val.to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => {
                return Err(ClinicError::Configuration(format!(
                    "Invalid CLINIC_SHELL_FORMAT '{}'. Must be one of: text, json",
                    other
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("CLINIC_SHELL_PAUSE_AFTER_ACTION") {
        config.shell.pause_after_action = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_substitute_env_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var("CLINIC_TEST_NAME", "San Martín");
        let input = "name = \"${CLINIC_TEST_NAME}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "name = \"San Martín\"\n");
        std::env::remove_var("CLINIC_TEST_NAME");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("CLINIC_MISSING_VAR");
        let input = "name = \"${CLINIC_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("CLINIC_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# name = \"${CLINIC_NEVER_SET}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${CLINIC_NEVER_SET}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(ClinicError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.clinic.name, "Clinic");
    }

    #[test]
    fn test_load_config_valid() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let toml_content = r#"
[application]
log_level = "debug"

[clinic]
name = "Clínica Central"
weekday_locale = "es"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.clinic.name, "Clínica Central");
        assert_eq!(
            config.clinic.weekday_locale,
            crate::domain::WeekdayLocale::Es
        );
    }

    #[test]
    fn test_parse_config_rejects_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let err = parse_config("[logging]\nlocal_rotation = \"weekly\"\n").unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
