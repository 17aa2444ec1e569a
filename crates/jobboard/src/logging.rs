//! Logging setup for front ends.
//!
//! Installs a `tracing-subscriber` registry writing to stderr, plus the
//! `tracing_log::LogTracer` bridge so `log::*` calls from the database layer
//! end up in the same stream.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ConfigError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "JOBBOARD_LOG";

/// Level after applying `-v` flags: one raises to debug, two or more to trace.
pub fn effective_level(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_lowercase(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Builds the filter from `JOBBOARD_LOG` if set, otherwise from `level`.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if !directives.trim().is_empty() {
            return EnvFilter::try_new(&directives).map_err(|e| ConfigError::Validation {
                message: format!("Invalid {} filter '{}': {}", LOG_ENV, directives, e),
            });
        }
    }

    // Keep the SQLite layer quiet unless asked for explicitly.
    let filter = format!("{},rusqlite=warn", level);
    EnvFilter::try_new(&filter).map_err(|e| ConfigError::Validation {
        message: format!("Invalid log filter '{}': {}", filter, e),
    })
}

/// Initializes global logging. Calling it again is a no-op.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<(), ConfigError> {
    let level = effective_level(&config.level, verbosity);
    let filter = build_env_filter(&level)?;

    let layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter)
            .boxed(),
    };

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        return Ok(());
    }

    // ok() in case the registry already installed the bridge
    tracing_log::LogTracer::init().ok();
    tracing::trace!(level = %level, format = ?config.format, "Logging initialized");

    Ok(())
}
