//! # Commands
//!
//! Argument definitions for the `mpa` binary and the code that runs them.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mpa [-v..] [--config PATH] <COMMAND>                                   │
//! │                                                                         │
//! │  round [-p POLICY] [--precision P] [--json] VALUES..                    │
//! │        one report per value                                             │
//! │  table [--precision P] [--json] VALUE                                   │
//! │        one report per policy                                            │
//! │  mode N                                                                 │
//! │        "Rounding mode set to: N (policy)" or InvalidRoundMode           │
//! │  arch                                                                   │
//! │        build-time architecture description                              │
//! │  config                                                                 │
//! │        effective configuration as TOML                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All output goes to the writer passed to [`run`]. Diagnostics go through
//! `tracing`, which the binary routes to stderr.

use clap::{ArgAction, Args, Parser, Subcommand};
use mpa_core::{Architecture, Logger, Precision, RoundingPolicy, TracingLogger};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{parse_policy, CliConfig};
use crate::error::CliResult;
use crate::report::RoundingReport;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "mpa",
    version,
    about = "Round floating-point values under selectable policies",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Round values with one policy.
    Round(RoundArgs),

    /// Round one value with every policy.
    Table(TableArgs),

    /// Validate a numeric rounding-mode selector.
    Mode {
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },

    /// Print the architecture this build targets.
    Arch,

    /// Print the effective configuration.
    Config,
}

#[derive(Debug, Args)]
pub struct RoundArgs {
    /// Policy name, alias or mode number. Defaults to the configured policy.
    #[arg(short, long, value_parser = parse_policy)]
    pub policy: Option<RoundingPolicy>,

    /// single | double. Defaults to the configured precision.
    #[arg(long)]
    pub precision: Option<Precision>,

    /// Print a JSON array of reports.
    #[arg(long)]
    pub json: bool,

    /// Values to round. Use `--` before values like `-inf`.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct TableArgs {
    #[arg(long)]
    pub precision: Option<Precision>,

    #[arg(long)]
    pub json: bool,

    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

// =============================================================================
// Execution
// =============================================================================

/// Runs `cli.command` with `config` as the source of defaults.
pub fn run<W: Write>(cli: &Cli, config: &CliConfig, out: &mut W) -> CliResult<()> {
    let logger: &dyn Logger = &TracingLogger;

    match &cli.command {
        Command::Round(args) => {
            let policy = args.policy.unwrap_or(config.rounding.policy);
            let precision = args.precision.unwrap_or(config.rounding.precision);
            debug!(%policy, %precision, count = args.values.len(), "Rounding values");

            let reports: Vec<RoundingReport> = args
                .values
                .iter()
                .map(|&value| RoundingReport::evaluate(value, policy, precision, Some(logger)))
                .collect();

            if args.json {
                write_json(out, &reports)
            } else {
                for report in &reports {
                    writeln!(out, "{report}")?;
                }
                Ok(())
            }
        }

        Command::Table(args) => {
            let precision = args.precision.unwrap_or(config.rounding.precision);
            let reports = RoundingReport::table(args.value, precision, Some(logger));

            if args.json {
                write_json(out, &reports)
            } else {
                writeln!(out, "{} ({precision})", args.value)?;
                for report in &reports {
                    writeln!(
                        out,
                        "  {}  {:<14}  {}",
                        report.policy.mode(),
                        report.policy.name(),
                        report.result
                    )?;
                }
                Ok(())
            }
        }

        Command::Mode { mode } => {
            let policy = RoundingPolicy::from_mode(*mode)?;
            info!(mode, %policy, "Rounding mode selected");
            writeln!(out, "Rounding mode set to: {mode} ({policy})")?;
            Ok(())
        }

        Command::Arch => {
            let arch = Architecture::current();
            writeln!(out, "{}", arch.description())?;
            writeln!(out, "target: {arch}")?;
            Ok(())
        }

        Command::Config => {
            out.write_all(config.to_toml()?.as_bytes())?;
            Ok(())
        }
    }
}

fn write_json<W: Write>(out: &mut W, reports: &[RoundingReport]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

/// The `EnvFilter` directives to install for a `-v` count.
pub fn verbosity_filter(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info,mpa=debug".to_string(),
        _ => "debug,mpa=trace".to_string(),
    }
}
