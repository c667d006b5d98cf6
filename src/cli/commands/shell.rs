//! Shell command implementation
//!
//! This module implements the `shell` command: the interactive clinic menu.
//! The menu loop itself is [`Session`], which works over any reader/writer
//! pair so it can be driven from tests as well as from a terminal.

use crate::cli::commands::build_registry;
use crate::config::{load_config_or_default, ClinicConfig, OutputFormat};
use crate::core::Registry;
use crate::domain::Specialty;
use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};

/// Arguments for the shell command
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Output format for listings and histories (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Start with an empty registry even if the config declares seed records
    #[arg(long)]
    pub no_seed: bool,
}

impl ShellArgs {
    /// Execute the shell command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config_or_default(config_path) {
            Ok(config) => self.execute_with_config(config).await,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                Ok(2) // Configuration error exit code
            }
        }
    }

    /// Execute the shell command with an already loaded configuration
    pub async fn execute_with_config(&self, config: ClinicConfig) -> anyhow::Result<i32> {
        let registry = match build_registry(&config, !self.no_seed) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to load seed records");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let format = self.format.unwrap_or(config.shell.format);
        let pause = config.shell.pause_after_action;
        let clinic_name = config.clinic.name.clone();
        tracing::info!(clinic = %clinic_name, ?format, "Starting interactive shell");

        let session = tokio::task::spawn_blocking(move || {
            let stdin = io::stdin();
            let mut session = Session::new(registry, stdin.lock(), io::stdout())
                .with_format(format)
                .with_pause(pause)
                .with_clinic_name(clinic_name);
            session.run()
        });

        tokio::select! {
            result = session => {
                let end = result??;
                tracing::info!(?end, "Shell session finished");
                Ok(0)
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT (Ctrl+C), leaving shell");
                println!("\n\n👋 Session interrupted by user.");
                Ok(0)
            }
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose option 0
    Exit,
    /// Input ran out
    EndOfInput,
}

/// Interactive menu over a registry
pub struct Session<R, W> {
    registry: Registry,
    input: R,
    output: W,
    format: OutputFormat,
    pause_after_action: bool,
    clinic_name: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with text output and no pauses
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            format: OutputFormat::Text,
            pause_after_action: false,
            clinic_name: "Clinic".to_string(),
        }
    }

    /// Sets the output format for listings and histories
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Waits for Enter after each action when `pause` is true
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause_after_action = pause;
        self
    }

    /// Sets the name shown in the banner
    pub fn with_clinic_name(mut self, name: impl Into<String>) -> Self {
        self.clinic_name = name.into();
        self
    }

    /// The registry as the session has left it
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the session, returning the registry and the output sink
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Runs the menu loop until the user exits or input runs out
    ///
    /// Registry errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from the underlying reader or writer.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        writeln!(self.output, "🏥 Welcome to {}", self.clinic_name)?;

        loop {
            self.print_menu()?;
            let choice = match self.read_line("Choose an option (0-9): ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Ok(SessionEnd::EndOfInput)
                }
                Err(e) => return Err(e),
            };

            let result = match choice.as_str() {
                "1" => self.register_patient(),
                "2" => self.register_doctor(),
                "3" => self.book_appointment(),
                "4" => self.add_specialty(),
                "5" => self.issue_prescription(),
                "6" => self.show_history(),
                "7" => self.list_appointments(),
                "8" => self.list_patients(),
                "9" => self.list_doctors(),
                "0" => {
                    writeln!(self.output, "\n👋 Thank you for using {}", self.clinic_name)?;
                    return Ok(SessionEnd::Exit);
                }
                _ => writeln!(
                    self.output,
                    "❌ Invalid option. Please choose an option from 0 to 9."
                ),
            };

            match result {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Ok(SessionEnd::EndOfInput)
                }
                Err(e) => return Err(e),
            }

            if self.pause_after_action {
                match self.read_line("\nPress Enter to continue...") {
                    Ok(_) => {}
                    Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                        return Ok(SessionEnd::EndOfInput)
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(50);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "🏥 {}", self.clinic_name.to_uppercase())?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1) Register patient")?;
        writeln!(self.output, "2) Register doctor")?;
        writeln!(self.output, "3) Book appointment")?;
        writeln!(self.output, "4) Add specialty")?;
        writeln!(self.output, "5) Issue prescription")?;
        writeln!(self.output, "6) View clinical history")?;
        writeln!(self.output, "7) List all appointments")?;
        writeln!(self.output, "8) List all patients")?;
        writeln!(self.output, "9) List all doctors")?;
        writeln!(self.output, "0) Exit")?;
        writeln!(self.output, "{rule}")
    }

    fn register_patient(&mut self) -> io::Result<()> {
        self.heading("📝 REGISTER PATIENT")?;
        let Some(name) = self.required("Patient name: ", "The name")? else {
            return Ok(());
        };
        let Some(id) = self.required("Patient ID: ", "The ID")? else {
            return Ok(());
        };
        let Some(birth_date) = self.required("Birth date (DD/MM/YYYY): ", "The birth date")?
        else {
            return Ok(());
        };

        let patient = match crate::domain::Patient::new(id, name, birth_date) {
            Ok(p) => p,
            Err(e) => return writeln!(self.output, "❌ Error: {e}"),
        };
        match self.registry.register_patient(patient) {
            Ok(patient) => writeln!(self.output, "✅ Patient registered: {patient}"),
            Err(e) => writeln!(self.output, "❌ Error: {e}"),
        }
    }

    fn register_doctor(&mut self) -> io::Result<()> {
        self.heading("👨‍⚕️ REGISTER DOCTOR")?;
        let Some(name) = self.required("Doctor name: ", "The name")? else {
            return Ok(());
        };
        let Some(license) = self.required("License number: ", "The license number")? else {
            return Ok(());
        };

        let doctor = match crate::domain::Doctor::new(name, license) {
            Ok(d) => d,
            Err(e) => return writeln!(self.output, "❌ Error: {e}"),
        };
        match self.registry.register_doctor(doctor) {
            Ok(doctor) => writeln!(self.output, "✅ Doctor registered: {doctor}"),
            Err(e) => writeln!(self.output, "❌ Error: {e}"),
        }
    }

    fn book_appointment(&mut self) -> io::Result<()> {
        self.heading("📅 BOOK APPOINTMENT")?;
        let Some(patient_id) = self.required("Patient ID: ", "The ID")? else {
            return Ok(());
        };
        let Some(license) = self.required("License number: ", "The license number")? else {
            return Ok(());
        };
        let Some(specialty) = self.required("Specialty: ", "The specialty")? else {
            return Ok(());
        };
        let Some(date) = self.required("Date (DD/MM/YYYY): ", "The date")? else {
            return Ok(());
        };
        let Some(time) = self.required("Time (HH:MM): ", "The time")? else {
            return Ok(());
        };

        let Some(timestamp) = parse_timestamp(&date, &time) else {
            return writeln!(
                self.output,
                "❌ Invalid date or time. Use DD/MM/YYYY for the date and HH:MM for the time."
            );
        };

        match self
            .registry
            .book_appointment(&patient_id, &license, &specialty, timestamp)
        {
            Ok(appointment) => writeln!(self.output, "✅ Appointment booked: {appointment}"),
            Err(e) => writeln!(self.output, "❌ Error: {e}"),
        }
    }

    fn add_specialty(&mut self) -> io::Result<()> {
        self.heading("🏥 ADD SPECIALTY TO DOCTOR")?;
        let Some(license) = self.required("License number: ", "The license number")? else {
            return Ok(());
        };
        let Some(doctor) = self.registry.doctor_by_license(&license) else {
            return writeln!(self.output, "❌ No doctor registered with that license number.");
        };
        let Some(kind) = self.required("Specialty type: ", "The specialty type")? else {
            return Ok(());
        };

        writeln!(self.output, "Enter the days it is offered (comma separated):")?;
        writeln!(
            self.output,
            "Options: {}",
            self.registry.weekdays().names().join(", ")
        )?;
        let days = split_list(&self.read_line("Days: ")?);
        if days.is_empty() {
            return writeln!(self.output, "❌ At least one day is required.");
        }

        let specialty = Specialty::new(kind, &days);
        match self.registry.add_specialty(&license, specialty.clone()) {
            Ok(true) => {
                writeln!(self.output, "✅ Specialty added: {specialty}")?;
                writeln!(self.output, "   To doctor: {}", doctor.name())
            }
            Ok(false) => writeln!(
                self.output,
                "ℹ️  {} already offers {specialty}",
                doctor.name()
            ),
            Err(e) => writeln!(self.output, "❌ Error: {e}"),
        }
    }

    fn issue_prescription(&mut self) -> io::Result<()> {
        self.heading("💊 ISSUE PRESCRIPTION")?;
        let Some(patient_id) = self.required("Patient ID: ", "The ID")? else {
            return Ok(());
        };
        let Some(license) = self.required("License number: ", "The license number")? else {
            return Ok(());
        };

        writeln!(self.output, "Enter the medications (comma separated):")?;
        let medications = split_list(&self.read_line("Medications: ")?);
        if medications.is_empty() {
            return writeln!(self.output, "❌ At least one medication is required.");
        }

        match self
            .registry
            .issue_prescription(&patient_id, &license, &medications)
        {
            Ok(prescription) => writeln!(self.output, "✅ Prescription issued: {prescription}"),
            Err(e) => writeln!(self.output, "❌ Error: {e}"),
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        self.heading("📋 CLINICAL HISTORY")?;
        let Some(patient_id) = self.required("Patient ID: ", "The ID")? else {
            return Ok(());
        };
        let Some(history) = self.registry.history_for(&patient_id) else {
            return writeln!(self.output, "❌ No patient registered with that ID.");
        };

        if self.format == OutputFormat::Json {
            return self.write_json(&history);
        }

        writeln!(self.output, "\n📋 {history}")?;
        writeln!(self.output, "\n--- APPOINTMENTS ---")?;
        self.write_numbered(history.appointments(), "No appointments recorded.")?;
        writeln!(self.output, "\n--- PRESCRIPTIONS ---")?;
        self.write_numbered(history.prescriptions(), "No prescriptions recorded.")
    }

    fn list_appointments(&mut self) -> io::Result<()> {
        self.heading("📅 ALL APPOINTMENTS")?;
        let appointments = self.registry.list_appointments();
        self.write_listing(&appointments, "appointments", "No appointments booked.")
    }

    fn list_patients(&mut self) -> io::Result<()> {
        self.heading("👥 ALL PATIENTS")?;
        let patients = self.registry.list_patients();
        self.write_listing(&patients, "patients", "No patients registered.")
    }

    fn list_doctors(&mut self) -> io::Result<()> {
        self.heading("👨‍⚕️ ALL DOCTORS")?;
        let doctors = self.registry.list_doctors();
        self.write_listing(&doctors, "doctors", "No doctors registered.")
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n{title}")?;
        writeln!(self.output, "{}", "-".repeat(30))
    }

    fn write_listing<T: Display + Serialize>(
        &mut self,
        items: &[T],
        noun: &str,
        empty: &str,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(items);
        }
        self.write_numbered(items, empty)?;
        if !items.is_empty() {
            writeln!(self.output, "\nTotal {noun}: {}", items.len())?;
        }
        Ok(())
    }

    fn write_numbered<T: Display>(&mut self, items: &[T], empty: &str) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(self.output, "{empty}");
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {item}", i + 1)?;
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.output, "{json}")
    }

    /// Prompts for a value, printing a message and returning `None` if it is blank
    fn required(&mut self, prompt: &str, label: &str) -> io::Result<Option<String>> {
        let value = self.read_line(prompt)?;
        if value.is_empty() {
            writeln!(self.output, "❌ {label} cannot be empty.")?;
            return Ok(None);
        }
        Ok(Some(value))
    }

    /// Reads one trimmed line; end of input is reported as `UnexpectedEof`
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }
}

/// Parses a `DD/MM/YYYY` date and an `HH:MM` time
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date.trim(), time.trim()), "%d/%m/%Y %H:%M")
        .ok()
}

/// Splits a comma-separated list, trimming entries and dropping blank ones
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
