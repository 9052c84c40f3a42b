//! Registration records and the append-only log they are written to.

use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::registration::{error::LogReadError, validation::Registrant};

/// Log file used when no other path is configured.
pub const DEFAULT_LOG_FILE: &str = "registration_file.txt";

/// One line of the registration log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord(String);

impl RegistrationRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Registrant> for RegistrationRecord {
    fn from(registrant: &Registrant) -> Self {
        Self(format!("New member name: {} and age {}", registrant.name, registrant.age))
    }
}

impl fmt::Display for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append-only text log of registrations.
///
/// The file is created on first append and never truncated. Each call to
/// [`RegistrationLog::append`] opens the file, writes exactly one line and
/// releases the handle before returning.
#[derive(Debug, Clone)]
pub struct RegistrationLog {
    path: PathBuf,
}

impl RegistrationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` followed by a newline.
    pub fn append(&self, record: &RegistrationRecord) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        debug!(path = %self.path.display(), "Registration log opened");
        writeln!(file, "{record}")?;
        file.flush()?;
        info!(path = %self.path.display(), %record, "Registration recorded");
        Ok(())
    }

    /// Reads every record currently in the log, in append order.
    ///
    /// A log that was never written is reported as [`LogReadError::Missing`]
    /// so callers can tell "no registrations yet" apart from an I/O failure.
    pub fn records(&self) -> Result<Vec<RegistrationRecord>, LogReadError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LogReadError::Missing(self.path.clone())
            } else {
                LogReadError::Io { path: self.path.clone(), source }
            }
        })?;
        Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| RegistrationRecord(line.to_string()))
            .collect())
    }
}

impl Default for RegistrationLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}
