//! Teenager club registration.
//!
//! This crate validates a candidate's name and age and, when both checks
//! pass, appends a single record line to a plain text registration log.
//! A failed attempt never leaves a trace in the log.
//!
//! The interactive front-end lives in the `clubreg_interactive` crate; this
//! crate holds the validators, the log and the registration workflow so that
//! they can be driven from any reader/writer pair.

#[cfg(test)]
mod tests;

pub mod registration;

#[cfg(feature = "clubreg_tracing")]
pub mod clubreg_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    /// This sets up a tracing subscriber that will display logs during test execution.
    /// Call this at the beginning of tests that need to see tracing output.
    pub fn init() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("off"))
                .unwrap();

            fmt().with_target(false).with_test_writer().with_env_filter(filter).init();
        });
    }
}
