use std::path::PathBuf;

use thiserror::Error;

/// Malformed or semantically invalid user input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Missing comma")]
    MissingSeparator,

    #[error("Expected a single comma, found {0}")]
    TooManySeparators(usize),

    #[error("Incorrect input: Name or surname missing")]
    MissingNamePart,

    #[error("Age must be a whole number, got '{0}'")]
    MalformedAge(String),

    #[error("Only positive values are allowed")]
    NegativeAge(i64),

    #[error("No input provided")]
    NoInput,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("The age is not within the 'teenager' category")]
    OutsideCohort { age: i64 },

    #[error("Could not save registration: {0}")]
    Persistence(#[source] std::io::Error),

    #[error("Could not read input: {0}")]
    Console(#[source] std::io::Error),
}

impl RegistrationError {
    /// Whether the failure was caused by what the user typed, as opposed to
    /// the environment (console or log file).
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::OutsideCohort { .. })
    }
}

#[derive(Debug, Error)]
pub enum LogReadError {
    #[error("Registration log '{}' does not exist", .0.display())]
    Missing(PathBuf),

    #[error("Could not read registration log '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
