//! # CLI Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CLI Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Output      │  │        Core             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigParse    │  │  Io             │  │  MpaError               │ │
//! │  │  ConfigSerialize│  │  Json           │  │  (InvalidRoundMode ..)  │ │
//! │  │  InvalidConfig  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mpa_core::MpaError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // Core Errors
    // =========================================================================
    /// An error raised by mpa-core, e.g. an out-of-range mode selector.
    #[error(transparent)]
    Core(#[from] MpaError),
}

impl CliError {
    /// Returns true for errors caused by the config file or environment.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CliError::ConfigParse(_) | CliError::ConfigSerialize(_) | CliError::InvalidConfig(_)
        )
    }
}
