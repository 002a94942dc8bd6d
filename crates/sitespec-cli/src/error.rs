//! Error types for the `sitespec` command.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring the command or loading spec files.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A spec file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A spec file was opened but could not be parsed.
    #[error("{}: {source}", path.display())]
    Spec {
        /// Path given on the command line.
        path: PathBuf,
        /// Parse failure reported by the spec reader.
        #[source]
        source: sitespec::SpecError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitespec::{InvalidSpecInfo, SpecError};

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown log level".to_string());
        assert_eq!(error.to_string(), "invalid configuration: unknown log level");
    }

    #[test]
    fn open_error_names_the_path() {
        let error = CliError::Open {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "cannot open missing.txt: not found");
    }

    #[test]
    fn spec_error_prefixes_the_path() {
        let error = CliError::Spec {
            path: PathBuf::from("example.com.txt"),
            source: SpecError::InvalidSpec(InvalidSpecInfo::new("bad", 2, "prune")),
        };
        assert_eq!(
            error.to_string(),
            "example.com.txt: invalid spec file: bad (line 2, label `prune`)"
        );
    }
}
