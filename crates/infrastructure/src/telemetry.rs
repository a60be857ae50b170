//! Logging setup
//!
//! Console tracing for the desktop application: an `EnvFilter` picks the
//! levels, a fmt layer renders to the console. `RUST_LOG` overrides the
//! configured filter.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for log output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Level filter directives (e.g., "info", "stockdesk=debug")
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Telemetry setup failure
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed
    #[error("Tracing setup failed: {0}")]
    Init(String),
}

/// Initialize console logging
///
/// Installs the global subscriber, so call it once at startup.
///
/// # Errors
///
/// Returns [`TelemetryError::Init`] when a global subscriber is already
/// set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %config.log_filter, "Logging initialized");
    Ok(())
}
