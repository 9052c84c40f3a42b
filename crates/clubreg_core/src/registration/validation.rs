//! Input validation for registration attempts.
//!
//! Two independent checks gate every registration:
//!
//! **Name Validation**: the raw name must be `surname,firstname`, with exactly
//! one comma and a non-empty part on each side of it. The raw text is kept
//! as-is; no trimming or case folding is applied.
//!
//! **Age Validation**: negative ages are rejected as malformed input, then the
//! age must fall within the teenager [`COHORT`]. The two failures belong to
//! different classes: a negative age is a [`ValidationError`], an out-of-cohort
//! age is [`RegistrationError::OutsideCohort`].
//!
//! Both validators are pure and have no side effects.

use std::{fmt, num::IntErrorKind, ops::RangeInclusive};

use crate::registration::error::{RegistrationError, ValidationError};

/// Inclusive age range accepted by the club.
pub const COHORT: RangeInclusive<i64> = 12..=19;

const SEPARATOR: char = ',';

/// A name that passed [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberName(String);

impl MemberName {
    /// Part before the comma.
    pub fn surname(&self) -> &str {
        self.parts().0
    }

    /// Part after the comma.
    pub fn first_name(&self) -> &str {
        self.parts().1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parts(&self) -> (&str, &str) {
        // Construction guarantees exactly one separator.
        self.0.split_once(SEPARATOR).unwrap_or((&self.0, ""))
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An age that passed [`validate_age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemberAge(i64);

impl MemberAge {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate whose name and age both passed validation.
///
/// Only obtainable from validated parts, so holding one proves that the
/// attempt is eligible to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub name: MemberName,
    pub age: MemberAge,
}

impl Registrant {
    pub fn new(name: MemberName, age: MemberAge) -> Self {
        Self { name, age }
    }
}

/// Validates a raw `surname,firstname` string.
///
/// # Arguments
/// * `raw` - Name exactly as entered by the user
///
/// # Errors
/// * [`ValidationError::MissingSeparator`] if there is no comma
/// * [`ValidationError::TooManySeparators`] if there is more than one comma
/// * [`ValidationError::MissingNamePart`] if either side of the comma is empty
pub fn validate_name(raw: &str) -> Result<MemberName, ValidationError> {
    match raw.matches(SEPARATOR).count() {
        0 => return Err(ValidationError::MissingSeparator),
        1 => {}
        n => return Err(ValidationError::TooManySeparators(n)),
    }

    match raw.split_once(SEPARATOR) {
        Some((surname, first_name)) if !surname.is_empty() && !first_name.is_empty() => {
            Ok(MemberName(raw.to_string()))
        }
        _ => Err(ValidationError::MissingNamePart),
    }
}

/// Parses a raw age string into an integer.
///
/// Surrounding whitespace is ignored. Range checks are left to [`validate_age`].
/// Whole numbers too large for an `i64` saturate instead of failing, so they
/// still land in the right failure class.
pub fn parse_age(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(ValidationError::MalformedAge(trimmed.to_string())),
    })
}

/// Validates an integer age against the teenager cohort.
///
/// Negativity is checked first and reported as malformed input; only then is
/// the value checked against [`COHORT`].
///
/// # Errors
/// * [`RegistrationError::Invalid`] wrapping [`ValidationError::NegativeAge`] for `age < 0`
/// * [`RegistrationError::OutsideCohort`] for any other age outside the cohort
pub fn validate_age(age: i64) -> Result<MemberAge, RegistrationError> {
    if age < 0 {
        return Err(ValidationError::NegativeAge(age).into());
    }
    if !COHORT.contains(&age) {
        return Err(RegistrationError::OutsideCohort { age });
    }
    Ok(MemberAge(age))
}
