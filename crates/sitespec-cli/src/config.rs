//! Command configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `SITESPEC_`; command line flags take precedence over both.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that normal runs keep stderr quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, including skipped lines.
    Trace,
    /// Per-file and per-directive detail.
    Debug,
    /// Summary of each loaded file.
    Info,
    /// Suspicious but accepted input.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

const LOG_LEVEL_VAR: &str = "SITESPEC_LOG_LEVEL";
const COMPACT_VAR: &str = "SITESPEC_COMPACT";

/// Configuration for the `sitespec` command.
///
/// # Environment Variables
///
/// - `SITESPEC_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `SITESPEC_COMPACT`: Emit single-line JSON (`1`/`true`/`yes` or
///   `0`/`false`/`no`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level written to stderr.
    pub log_level: LogLevel,
    /// Whether JSON output is printed on a single line.
    pub compact: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let compact = match lookup(COMPACT_VAR) {
            Some(val) => parse_switch(&val).ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "invalid {COMPACT_VAR} value '{val}', expected yes or no"
                ))
            })?,
            None => false,
        };

        Ok(Self { log_level, compact })
    }

    /// Apply optional command line overrides.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, compact: Option<bool>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(compact) = compact {
            self.compact = compact;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.compact);
    }

    #[test]
    fn reads_values_from_environment() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("SITESPEC_LOG_LEVEL", "debug"),
            ("SITESPEC_COMPACT", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.compact);
    }

    #[test]
    fn rejects_invalid_compact_value() {
        let result = CliConfig::from_lookup(lookup_from(&[("SITESPEC_COMPACT", "sometimes")]));
        assert!(result.unwrap_err().to_string().contains("SITESPEC_COMPACT"));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Error), Some(true));
        assert_eq!(config.log_level, LogLevel::Error);
        assert!(config.compact);

        let config = CliConfig::default().apply_overrides(None, None);
        assert_eq!(config, CliConfig::default());
    }
}
