//! Registration of new club members.
//!
//! ## Flow
//!
//! A registration attempt moves through the stages described by
//! [`workflow::Stage`]: raw input is collected, the name then the age are
//! validated, and the formatted record is appended to the
//! [`record::RegistrationLog`]. Validation short-circuits: an invalid name
//! means the age is never looked at.
//!
//! ## Failure classes
//!
//! - [`error::ValidationError`]: malformed input (missing comma, empty name
//!   part, non-numeric or negative age).
//! - [`error::RegistrationError::OutsideCohort`]: a well-formed age outside
//!   the teenager cohort.
//! - [`error::RegistrationError::Persistence`]: the log could not be written.
//!
//! Every class ends in the same terminal report, so a caller always learns
//! whether the attempt succeeded.

pub mod error;
pub mod record;
pub mod validation;
pub mod workflow;

pub use error::{LogReadError, RegistrationError, ValidationError};
pub use record::{DEFAULT_LOG_FILE, RegistrationLog, RegistrationRecord};
pub use validation::{
    COHORT, MemberAge, MemberName, Registrant, parse_age, validate_age, validate_name,
};
pub use workflow::{CandidateInput, Registrar, RegistryConfig, Stage};
