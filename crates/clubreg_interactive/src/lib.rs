//! Command-line front-end for club registration.
//!
//! Three ways to use it:
//! - `register` (default): prompt for a name and an age on the terminal
//! - `register --name <NAME> --age <AGE>`: one attempt without prompting
//! - `show`: print the records already in the registration log
//!
//! The log location comes from `--log-file` or `CLUBREG_LOG_FILE`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clubreg_core::registration::{
    CandidateInput, DEFAULT_LOG_FILE, LogReadError, Registrar, RegistryConfig, Stage,
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "clubreg")]
#[command(about = "Register new members of the teenager club", long_about = None)]
pub struct Args {
    /// Path of the append-only registration log
    #[arg(short, long, env = "CLUBREG_LOG_FILE", default_value = DEFAULT_LOG_FILE, global = true)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Action>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Register a new member (prompts for any value not given)
    Register {
        /// Name as "surname,firstname"
        #[arg(short, long, requires = "age", allow_hyphen_values = true)]
        name: Option<String>,

        /// Age in years
        #[arg(short, long, requires = "name", allow_hyphen_values = true)]
        age: Option<String>,
    },
    /// Print every record in the registration log
    Show,
}

impl Args {
    pub fn config(&self) -> RegistryConfig {
        RegistryConfig { log_file: self.log_file.clone() }
    }

    pub fn action(&self) -> Action {
        self.command.clone().unwrap_or(Action::Register { name: None, age: None })
    }
}

/// Executes the requested action against the given console streams.
///
/// Registration failures are reported on `writer` and are not errors here;
/// only console failures while printing the log surface as `Err`.
pub fn execute<R: BufRead, W: Write>(
    args: &Args,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<()> {
    let config = args.config();
    debug!(log_file = %config.log_file.display(), "Configuration loaded");
    let registrar = Registrar::new(&config);

    match args.action() {
        Action::Register { name: Some(name), age: Some(age) } => {
            let outcome = registrar.register(&CandidateInput::new(name, age));
            Registrar::conclude(&outcome, writer);
        }
        Action::Register { .. } => {
            let outcome = registrar.run(reader, writer);
            debug!(stage = ?Stage::of(&outcome), "Interactive registration finished");
        }
        Action::Show => show(&registrar, writer)?,
    }
    Ok(())
}

/// Prints the log, or a message saying it does not exist yet.
fn show<W: Write>(registrar: &Registrar, writer: &mut W) -> anyhow::Result<()> {
    match registrar.log().records() {
        Ok(records) if records.is_empty() => writeln!(writer, "No registrations recorded yet")?,
        Ok(records) => {
            info!(count = records.len(), "Registration log read");
            for record in records {
                writeln!(writer, "{record}")?;
            }
        }
        Err(e @ LogReadError::Missing(_)) => {
            writeln!(writer, "✗ {e}")?;
            writeln!(writer, "  Nobody has registered yet, or the path is wrong.")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
