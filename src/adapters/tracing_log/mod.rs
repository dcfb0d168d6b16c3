// Tracing log adapter - Structured logging using tracing crate

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::domain::errors::*;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// Single-line text output
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Installs the global tracing subscriber
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Parse a filter directive such as `info` or `gifcut_cli=debug,warn`
    pub fn filter(level: &str) -> Result<EnvFilter, DomainError> {
        EnvFilter::try_new(level).map_err(|e| {
            DomainError::ConfigError(format!(
                "Invalid log level '{}': {}. Valid levels: trace, debug, info, warn, error",
                level, e
            ))
        })
    }

    /// Initialize the subscriber with the already-resolved `level`.
    ///
    /// A second call is a no-op, so tests and embedders may call it freely.
    pub fn init(level: &str, format: LogFormat) -> Result<(), DomainError> {
        let filter = Self::filter(level)?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let _ = match format {
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Compact => builder.compact().with_target(false).try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        tracing::debug!(level, ?format, "Logging initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        assert!(TracingLogAdapter::filter("info").is_ok());
        assert!(TracingLogAdapter::filter("gifcut_cli=debug,warn").is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        assert!(matches!(
            TracingLogAdapter::filter("gifcut_cli=loud"),
            Err(DomainError::ConfigError(_))
        ));
    }

    #[test]
    fn test_init_is_idempotent() {
        assert!(TracingLogAdapter::init("warn", LogFormat::Compact).is_ok());
        assert!(TracingLogAdapter::init("warn", LogFormat::Json).is_ok());
    }
}
