//! The registration workflow.
//!
//! [`Registrar`] turns raw input into a persisted [`RegistrationRecord`] or a
//! [`RegistrationError`], and always finishes with a terminal report. It can
//! be driven either from an already collected [`CandidateInput`]
//! ([`Registrar::register`]) or interactively from any reader/writer pair
//! ([`Registrar::run`]).

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use tracing::{debug, info, warn};

use crate::registration::{
    error::{RegistrationError, ValidationError},
    record::{DEFAULT_LOG_FILE, RegistrationLog, RegistrationRecord},
    validation::{Registrant, parse_age, validate_age, validate_name},
};

pub const NAME_PROMPT: &str = "Please enter your surname separated by comma: ";
pub const AGE_PROMPT: &str = "Please enter your age: ";
pub const SUCCESS_MESSAGE: &str = "Registration Process completed SUCCESSFULLY";
pub const FAILURE_MESSAGE: &str = "Could not complete registration. Please try again";

/// Settings for a [`Registrar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Path of the append-only registration log
    pub log_file: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { log_file: PathBuf::from(DEFAULT_LOG_FILE) }
    }
}

/// Raw, unvalidated input for a single registration attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateInput {
    pub name: String,
    pub age: String,
}

impl CandidateInput {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self { name: name.into(), age: age.into() }
    }
}

/// Stages of a registration attempt.
///
/// `Persisted` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    InputCollected,
    Validated,
    Persisted,
    Failed,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Persisted | Stage::Failed)
    }

    /// Terminal stage reached by a finished attempt.
    pub fn of<T>(outcome: &Result<T, RegistrationError>) -> Self {
        if outcome.is_ok() { Stage::Persisted } else { Stage::Failed }
    }
}

fn enter(stage: Stage) {
    if stage.is_terminal() {
        info!(?stage, "Registration finished");
    } else {
        debug!(?stage, "Registration stage");
    }
}

/// Validates candidates and records successful registrations.
#[derive(Debug, Clone)]
pub struct Registrar {
    log: RegistrationLog,
}

impl Registrar {
    pub fn new(config: &RegistryConfig) -> Self {
        Self { log: RegistrationLog::new(&config.log_file) }
    }

    pub fn log(&self) -> &RegistrationLog {
        &self.log
    }

    /// Runs the name then the age validator on `input`.
    ///
    /// The age string is not parsed when the name is invalid.
    pub fn validate(input: &CandidateInput) -> Result<Registrant, RegistrationError> {
        let name = validate_name(&input.name)?;
        let age = validate_age(parse_age(&input.age)?)?;
        Ok(Registrant::new(name, age))
    }

    /// Validates `input` and appends its record to the log.
    ///
    /// The log file is only opened once both validators have passed.
    pub fn register(
        &self,
        input: &CandidateInput,
    ) -> Result<RegistrationRecord, RegistrationError> {
        enter(Stage::Start);
        enter(Stage::InputCollected);
        let outcome = Self::validate(input).and_then(|registrant| self.persist(&registrant));
        enter(Stage::of(&outcome));
        outcome
    }

    /// Prompts for a name and an age on `writer`, reading answers from `reader`.
    ///
    /// The age prompt is skipped when the name is invalid. A failure is printed
    /// as a single status line, and the terminal report is always printed last,
    /// whichever step failed.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<RegistrationRecord, RegistrationError> {
        enter(Stage::Start);
        let outcome = self.prompt_and_register(reader, writer);
        enter(Stage::of(&outcome));
        Self::conclude(&outcome, writer);
        outcome
    }

    /// Prints the failure message, if any, then the terminal report.
    ///
    /// Console write errors are logged rather than returned, so a failed
    /// failure message never keeps the report from being attempted.
    pub fn conclude<T, W: Write>(outcome: &Result<T, RegistrationError>, writer: &mut W) {
        if let Err(err) = outcome {
            warn!(user_error = err.is_user_error(), "Registration failed: {err}");
            if let Err(e) = writeln!(writer, "{err}") {
                warn!("Failed to print failure message: {e}");
            }
        }
        if let Err(e) = Self::report(outcome, writer) {
            warn!("Failed to print registration report: {e}");
        }
    }

    /// Terminal reporting step: one line, based only on success or failure.
    pub fn report<T, W: Write>(
        outcome: &Result<T, RegistrationError>,
        writer: &mut W,
    ) -> io::Result<()> {
        let message = if outcome.is_ok() { SUCCESS_MESSAGE } else { FAILURE_MESSAGE };
        writeln!(writer, "{message}")?;
        writer.flush()
    }

    fn prompt_and_register<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<RegistrationRecord, RegistrationError> {
        let name = validate_name(&prompt(reader, writer, NAME_PROMPT)?)?;
        let age = prompt(reader, writer, AGE_PROMPT)?;
        enter(Stage::InputCollected);
        let age = validate_age(parse_age(&age)?)?;
        self.persist(&Registrant::new(name, age))
    }

    fn persist(&self, registrant: &Registrant) -> Result<RegistrationRecord, RegistrationError> {
        enter(Stage::Validated);
        debug!(
            surname = registrant.name.surname(),
            first_name = registrant.name.first_name(),
            age = registrant.age.get(),
            "Candidate validated"
        );
        let record = RegistrationRecord::from(registrant);
        self.log.append(&record).map_err(RegistrationError::Persistence)?;
        Ok(record)
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

/// Prints `message`, then reads one line with its line ending removed.
fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<String, RegistrationError> {
    write!(writer, "{message}").map_err(RegistrationError::Console)?;
    writer.flush().map_err(RegistrationError::Console)?;

    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).map_err(RegistrationError::Console)?;
    if bytes_read == 0 {
        return Err(ValidationError::NoInput.into());
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}
