//! Command dispatch for the `sitespec` entrypoint.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::Result;
use sitespec::{SiteSpec, SpecError, read_rules, read_site_spec, read_testcases};
use tracing::{debug, info, warn};

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::output::{write_check_result, write_json};

/// Inspect Instapaper-style site spec files.
#[derive(Parser, Debug)]
#[command(name = "sitespec", author, version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Merge environment configuration with the flags given on the command line.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the environment holds invalid values.
    pub fn config(&self) -> Result<CliConfig, CliError> {
        let config = CliConfig::from_env()?;
        Ok(config.apply_overrides(self.log_level, self.compact.then_some(true)))
    }
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the extraction rules of a spec file as JSON.
    Rules {
        /// Spec file to read.
        file: PathBuf,
    },
    /// Print the test cases of a spec file as JSON.
    Tests {
        /// Spec file to read.
        file: PathBuf,
    },
    /// Check that each spec file parses, printing one line per file.
    Check {
        /// Spec files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Result of a command that completed without an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every file parsed.
    Success,
    /// At least one checked file was invalid.
    InvalidFiles,
}

/// Run a command, writing its output to `writer`.
///
/// # Errors
///
/// Returns an error if a file cannot be opened or parsed by `rules` or
/// `tests`, or if output cannot be written.
pub fn run(command: &Commands, config: &CliConfig, writer: &mut dyn Write) -> Result<Outcome> {
    match command {
        Commands::Rules { file } => {
            let rules = load_with(file, read_rules)?;
            info!(path = %file.display(), rules = rules.len(), "loaded rules");
            write_json(writer, &rules, config.compact)?;
        }
        Commands::Tests { file } => {
            let cases = load_with(file, read_testcases)?;
            info!(path = %file.display(), cases = cases.len(), "loaded test cases");
            write_json(writer, &cases, config.compact)?;
        }
        Commands::Check { files } => return check(files, writer),
    }
    Ok(Outcome::Success)
}

fn check(files: &[PathBuf], writer: &mut dyn Write) -> Result<Outcome> {
    let mut outcome = Outcome::Success;
    for file in files {
        let result: Result<SiteSpec, CliError> = load_with(file, read_site_spec);
        if let Err(err) = &result {
            warn!(error = %err, "spec file is invalid");
            outcome = Outcome::InvalidFiles;
        }
        write_check_result(writer, file, &result)?;
    }
    Ok(outcome)
}

fn load_with<T, F>(path: &Path, read: F) -> Result<T, CliError>
where
    F: FnOnce(BufReader<File>) -> Result<T, SpecError>,
{
    debug!(path = %path.display(), "reading spec file");
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file)).map_err(|source| CliError::Spec {
        path: path.to_path_buf(),
        source,
    })
}
