//! CLI entry point for clubreg
//!
//! # Examples
//!
//! Interactive registration:
//! ```bash
//! ./clubreg
//! Please enter your surname separated by comma: Doe,Jane
//! Please enter your age: 15
//! Registration Process completed SUCCESSFULLY
//! ```
//!
//! One-shot registration and read-back:
//! ```bash
//! ./clubreg --log-file members.txt register --name Doe,Jane --age 15
//! ./clubreg --log-file members.txt show
//! ```

use clap::Parser;
use clubreg_interactive::{Args, execute};
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the console transcript stays clean.
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    fmt().with_writer(io::stderr).with_target(false).with_env_filter(filter).init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout().lock();
    execute(&args, &mut reader, &mut writer)
}
