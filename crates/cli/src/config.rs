//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ROASTERY_OUTPUT` - `pretty` (default) or `compact` JSON output
//! - `ROASTERY_LOG_FORMAT` - `text` (default) or `json` log lines on stderr
//! - `ROASTERY_MAX_INPUT_BYTES` - Largest accepted input document (default: 1048576)
//! - `RUST_LOG` - Log filter (default: `roastery_cli=info`)

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How validated records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Indented JSON.
    #[default]
    Pretty,
    /// One-line JSON.
    Compact,
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("expected pretty or compact, got {other:?}")),
        }
    }
}

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected text or json, got {other:?}")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON output style for validated records
    pub output: OutputStyle,
    /// Log line format
    pub log_format: LogFormat,
    /// Largest accepted input document, in bytes
    pub max_input_bytes: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputStyle::default(),
            log_format: LogFormat::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let output = parse_or(&lookup, "ROASTERY_OUTPUT", defaults.output)?;
        let log_format = parse_or(&lookup, "ROASTERY_LOG_FORMAT", defaults.log_format)?;
        let max_input_bytes = parse_or(&lookup, "ROASTERY_MAX_INPUT_BYTES", defaults.max_input_bytes)?;
        if max_input_bytes == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "ROASTERY_MAX_INPUT_BYTES".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            output,
            log_format,
            max_input_bytes,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise use `default`.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        _ => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.max_input_bytes, 1024 * 1024);
    }

    #[test]
    fn test_values_parsed() {
        let config = CliConfig::from_lookup(lookup(&[
            ("ROASTERY_OUTPUT", "Compact"),
            ("ROASTERY_LOG_FORMAT", "json"),
            ("ROASTERY_MAX_INPUT_BYTES", "4096"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputStyle::Compact);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.max_input_bytes, 4096);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = CliConfig::from_lookup(lookup(&[("ROASTERY_OUTPUT", "  ")])).unwrap();
        assert_eq!(config.output, OutputStyle::Pretty);
    }

    #[test]
    fn test_invalid_output() {
        let err = CliConfig::from_lookup(lookup(&[("ROASTERY_OUTPUT", "yaml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ROASTERY_OUTPUT"));
    }

    #[test]
    fn test_zero_max_input_rejected() {
        let err = CliConfig::from_lookup(lookup(&[("ROASTERY_MAX_INPUT_BYTES", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar(
                "ROASTERY_MAX_INPUT_BYTES".to_string(),
                "must be greater than zero".to_string()
            )
        );
    }

    #[test]
    fn test_non_numeric_max_input_rejected() {
        assert!(CliConfig::from_lookup(lookup(&[("ROASTERY_MAX_INPUT_BYTES", "lots")])).is_err());
    }
}
