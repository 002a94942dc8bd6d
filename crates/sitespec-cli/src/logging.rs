//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so that JSON on stdout stays machine readable.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `SITESPEC_LOG_LEVEL`
/// 3. Default configuration value
///
/// If a global subscriber is already set, this function silently ignores
/// the error.
pub fn init_logging(config: &CliConfig) {
    // `try_init` also forwards `log` records emitted by the parser.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging already initialised; keeping existing subscriber");
    }
}
