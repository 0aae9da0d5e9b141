//! # mpa-cli: Command Line Front End
//!
//! The library half of the `mpa` binary. `main.rs` only parses arguments,
//! loads [`CliConfig`], installs the tracing subscriber and calls
//! [`commands::run`].
//!
//! ## Modules
//!
//! - [`commands`] - clap definitions and command execution
//! - [`config`] - Layered TOML + environment configuration
//! - [`report`] - Per-value rounding reports (text and JSON)
//! - [`error`] - CLI error type

pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use commands::{run, Cli, Command};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use report::RoundingReport;
