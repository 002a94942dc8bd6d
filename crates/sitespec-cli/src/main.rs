//! `sitespec` binary: print or check Instapaper-style site spec files.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use sitespec_cli::cli::{Cli, Outcome, run};
use sitespec_cli::config::CliConfig;
use sitespec_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let mut stdout = io::stdout().lock();
    match run(&cli.command, &config, &mut stdout) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::InvalidFiles) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "sitespec failed");
            ExitCode::FAILURE
        }
    }
}
