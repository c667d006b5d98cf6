//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the clinic using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Clinic - Medical Clinic Registry
#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(version, about, long_about = None)]
#[command(author = "Clinic Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clinic.toml", env = "CLINIC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINIC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive clinic menu
    Shell(commands::shell::ShellArgs),

    /// Show the registry after seeding
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
