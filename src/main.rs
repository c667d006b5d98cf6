// Clinic - Medical Clinic Registry
// Copyright (c) 2025 Clinic Contributors
// Licensed under the MIT License

use clap::Parser;
use clinic::cli::{Cli, Commands};
use clinic::config::{load_config_or_default, ClinicConfig, LoggingConfig};
use clinic::log_error_with_context;
use clinic::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Loaded once: logging reads it here and shell/status reuse it. A broken
    // file is reported by the command itself
    let config = load_config_or_default(&cli.config).ok();
    let (config_level, logging_config) = match &config {
        Some(config) => (config.application.log_level.clone(), config.logging.clone()),
        None => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Clinic - Medical Clinic Registry"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(logging_guard);
    process::exit(exit_code);
}

/// Execute the CLI command, reusing the configuration loaded at start-up
async fn execute_command(cli: &Cli, config: Option<ClinicConfig>) -> anyhow::Result<i32> {
    match (&cli.command, config) {
        (Commands::Shell(args), Some(config)) => args.execute_with_config(config).await,
        (Commands::Shell(args), None) => args.execute(&cli.config).await,
        (Commands::Status(args), Some(config)) => args.execute_with_config(&config).await,
        (Commands::Status(args), None) => args.execute(&cli.config).await,
        (Commands::ValidateConfig(args), _) => args.execute(&cli.config).await,
        (Commands::Init(args), _) => args.execute().await,
    }
}
