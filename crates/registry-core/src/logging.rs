//! Structured logging initialization.
//!
//! `RUST_LOG` always wins over the configured level so operators can turn
//! on debug output for a single module without touching config files.

use crate::{RegistryError, RegistryResult};
use std::str::FromStr;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(RegistryError::Configuration(format!(
                "Unknown log format: {}",
                other
            ))),
        }
    }
}

/// Builds the default filter directive for the given level.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("{level},tower_http=debug,sqlx=warn")
}

/// Installs the global tracing subscriber.
#[cfg(feature = "logging")]
pub fn init_logging(level: &str, format: LogFormat) -> RegistryResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| RegistryError::Internal(format!("Failed to install log subscriber: {}", e)))
}

/// Placeholder for when the logging feature is disabled.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: &str, _format: LogFormat) -> RegistryResult<()> {
    Ok(())
}
