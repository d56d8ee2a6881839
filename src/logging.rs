// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats for the library and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! Structured logging configuration with env-driven level and format

use std::env;
use std::io;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::errors::{AppError, AppResult};

/// Environment variable controlling the log level
pub const LOG_LEVEL_ENV: &str = "NUTRIWISE_LOG_LEVEL";

/// Environment variable controlling the log format
pub const LOG_FORMAT_ENV: &str = "NUTRIWISE_LOG_FORMAT";

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Human-readable format for development
    #[default]
    Full,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error); falls back
    /// to "info" when unset
    pub level: Option<String>,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Load from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var(LOG_FORMAT_ENV).as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Full,
        };
        Self {
            level: env::var(LOG_LEVEL_ENV).ok(),
            format,
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns a configuration error when the level directive is malformed or
/// a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let directive = config.level.as_deref().unwrap_or("info");
    let env_filter = EnvFilter::try_new(directive)
        .map_err(|e| AppError::config(format!("invalid log level '{directive}': {e}")))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).with_writer(io::stdout).json())
            .try_init(),
        LogFormat::Full => registry
            .with(fmt::layer().with_target(true).with_writer(io::stdout))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::config(format!("failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_full() {
        assert_eq!(LoggingConfig::default().format, LogFormat::Full);
    }
}
