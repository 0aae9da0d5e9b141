//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority, applied by commands)         │
//! │     --policy nearest_even --precision single                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     MPA_ROUND_POLICY=floor                                             │
//! │     MPA_PRECISION=single                                               │
//! │     MPA_LOG=debug                                                      │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or the platform config dir:                         │
//! │     ~/.config/mpa/config.toml (Linux)                                  │
//! │     ~/Library/Application Support/com.mpa.mpa/config.toml (macOS)      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     nearest, double, "warn,mpa=info"                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [rounding]
//! policy = "nearest_even"   # nearest, toward_zero, ..., floor
//! precision = "double"      # single | double
//!
//! [logging]
//! filter = "warn,mpa=debug" # tracing-subscriber EnvFilter syntax
//! ```

use mpa_core::{MpaError, Precision, RoundingPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// Environment variable overriding `rounding.policy`.
pub const ENV_ROUND_POLICY: &str = "MPA_ROUND_POLICY";
/// Environment variable overriding `rounding.precision`.
pub const ENV_PRECISION: &str = "MPA_PRECISION";
/// Environment variable overriding `logging.filter`.
pub const ENV_LOG: &str = "MPA_LOG";

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn,mpa=info";

// =============================================================================
// Rounding Settings
// =============================================================================

/// Parses a policy by name or alias, or by numeric mode selector (`0`-`6`).
pub fn parse_policy(s: &str) -> Result<RoundingPolicy, MpaError> {
    match s.trim().parse::<i64>() {
        Ok(mode) => RoundingPolicy::from_mode(mode),
        Err(_) => s.parse(),
    }
}

/// Defaults for commands that take `--policy` / `--precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundingSettings {
    #[serde(default)]
    pub policy: RoundingPolicy,

    #[serde(default)]
    pub precision: Precision,
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, e.g. `"warn,mpa=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Effective configuration of the `mpa` binary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub rounding: RoundingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CliConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `config_path` must exist (`ResourceNotFound` otherwise).
    /// The platform default path is
    /// optional and silently skipped when absent.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(MpaError::resource_not_found(format!(
                        "Config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                info!(?path, "Loading config from file");
                config = Self::from_toml(&std::fs::read_to_string(&path)?)?;
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading config from file");
                    config = Self::from_toml(&std::fs::read_to_string(&path)?)?;
                }
                Some(path) => debug!(?path, "Config file not found, using defaults"),
                None => debug!("No platform config directory, using defaults"),
            },
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections take their defaults.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `MPA_*` overrides read through `lookup`.
    ///
    /// Values that do not parse are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Rounding policy
        if let Some(policy) = lookup(ENV_ROUND_POLICY) {
            match parse_policy(&policy) {
                Ok(parsed) => {
                    debug!(policy = %parsed, "Overriding rounding policy from environment");
                    self.rounding.policy = parsed;
                }
                Err(e) => warn!(policy = %policy, "Ignoring {}: {}", ENV_ROUND_POLICY, e),
            }
        }

        // Precision
        if let Some(precision) = lookup(ENV_PRECISION) {
            match precision.parse::<Precision>() {
                Ok(parsed) => {
                    debug!(precision = %parsed, "Overriding precision from environment");
                    self.rounding.precision = parsed;
                }
                Err(e) => warn!(precision = %precision, "Ignoring {}: {}", ENV_PRECISION, e),
            }
        }

        // Log filter
        if let Some(filter) = lookup(ENV_LOG) {
            if filter.trim().is_empty() {
                warn!("Ignoring empty {}", ENV_LOG);
            } else {
                self.logging.filter = filter;
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "mpa", "mpa")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.rounding.policy, RoundingPolicy::Nearest);
        assert_eq!(config.rounding.precision, Precision::Double);
        assert_eq!(config.logging.filter, "warn,mpa=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = CliConfig::from_toml(
            r#"
            [rounding]
            policy = "floor"
            "#,
        )
        .unwrap();
        assert_eq!(config.rounding.policy, RoundingPolicy::Floor);
        assert_eq!(config.rounding.precision, Precision::Double);
        assert_eq!(config.logging, LoggingSettings::default());

        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let err = CliConfig::from_toml("[rounding]\npolicy = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CliConfig::default();
        config.rounding.policy = RoundingPolicy::NearestOdd;
        config.rounding.precision = Precision::Single;

        let text = config.to_toml().unwrap();
        assert!(text.contains("policy = \"nearest_odd\""));
        assert!(text.contains("precision = \"single\""));
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_policy_by_mode_or_name() {
        assert_eq!(parse_policy("4").unwrap(), RoundingPolicy::NearestOdd);
        assert_eq!(parse_policy(" ceil ").unwrap(), RoundingPolicy::Ceiling);
        assert_eq!(
            parse_policy("-1").unwrap_err().message(),
            "Attempted to set rounding mode to -1. Valid range is 0-6."
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config.apply_env_overrides(env(&[
            ("MPA_ROUND_POLICY", "bankers"),
            ("MPA_PRECISION", "f32"),
            ("MPA_LOG", "mpa=trace"),
        ]));
        assert_eq!(config.rounding.policy, RoundingPolicy::NearestEven);
        assert_eq!(config.rounding.precision, Precision::Single);
        assert_eq!(config.logging.filter, "mpa=trace");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = CliConfig::from_toml("[rounding]\npolicy = \"ceiling\"\n").unwrap();
        config.apply_env_overrides(env(&[
            ("MPA_ROUND_POLICY", "9"),
            ("MPA_PRECISION", "half"),
            ("MPA_LOG", "   "),
        ]));
        assert_eq!(config.rounding.policy, RoundingPolicy::Ceiling);
        assert_eq!(config.rounding.precision, Precision::Double);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_validate_empty_filter() {
        let config = CliConfig::from_toml("[logging]\nfilter = \"\"\n").unwrap();
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let path = std::env::temp_dir().join("mpa-cli-no-such-dir/config.toml");
        match CliConfig::load(Some(path)).unwrap_err() {
            CliError::Core(e) => {
                assert_eq!(e.kind(), mpa_core::ErrorKind::ResourceNotFound);
                assert!(e.is_runtime());
                assert!(e.message().starts_with("Config file not found: "));
                assert!(e.message().ends_with("config.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = std::env::temp_dir().join(format!("mpa-cli-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[rounding]\nprecision = \"single\"\n").unwrap();

        let config = CliConfig::load(Some(path)).unwrap();
        // MPA_PRECISION in the test environment would override the file
        if std::env::var(ENV_PRECISION).is_err() {
            assert_eq!(config.rounding.precision, Precision::Single);
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
