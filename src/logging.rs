//! Structured logging setup.
//!
//! Tables and detail views go to stdout via `println!`; operational
//! telemetry goes to stderr via tracing so piped output stays clean.

pub mod audit;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable colored output
    Pretty,
    /// Structured JSON lines
    Json,
}

/// Errors from logging initialization.
#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Failed to parse log filter: {0}")]
    FilterError(String),

    #[error("Failed to set global subscriber: {0}")]
    SetGlobalError(String),
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the provided level when set. All telemetry goes to
/// stderr.
pub fn init(level: Level, format: LogFormat) -> Result<(), LogInitError> {
    let filter = build_env_filter(level)?;

    match format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            );
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LogInitError::SetGlobalError(e.to_string()))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            );
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LogInitError::SetGlobalError(e.to_string()))?;
        }
    }

    Ok(())
}

fn build_env_filter(level: Level) -> Result<EnvFilter, LogInitError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string().to_lowercase()))
        .map_err(|e| LogInitError::FilterError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_builds_for_each_level() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            assert!(build_env_filter(level).is_ok());
        }
    }
}
