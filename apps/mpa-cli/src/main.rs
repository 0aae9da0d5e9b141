//! # mpa
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse args ──► load config ──► init tracing ──► run command ──► stdout │
//! │                 (bootstrap        (configured                            │
//! │                  subscriber)       filter, -v)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mpa_cli::commands::{self, verbosity_filter, Cli};
use mpa_cli::config::{CliConfig, DEFAULT_LOG_FILTER};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config loading logs before the configured filter is known
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(verbosity_filter(DEFAULT_LOG_FILTER, cli.verbose)))
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || CliConfig::load(cli.config.clone()))
        .context("Failed to load configuration")?;

    init_tracing(&verbosity_filter(&config.logging.filter, cli.verbose))?;
    debug!(?config, "Effective configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &config, &mut out)?;

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
///
/// ## Log Levels
/// - `logging.filter` in config.toml, or `MPA_LOG`
/// - `-v` - debug for mpa targets
/// - `-vv` - trace for mpa targets, including every rounded value
fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter: '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    Ok(())
}
