//! Application configuration
//!
//! Loaded in layers: built-in defaults, then an optional `stockdesk`
//! config file in the working directory, then `STOCKDESK_`-prefixed
//! environment variables such as `STOCKDESK_DATABASE__PATH`. Later
//! layers win.

use serde::{Deserialize, Serialize};

const DEFAULT_DB_PATH: &str = "stockdesk.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file; `:memory:` for a throwaway DB
    pub path: String,

    /// Maximum number of pooled database connections
    pub max_connections: u32,

    /// Whether to run pending migrations on startup
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            run_migrations: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment
    ///
    /// # Errors
    ///
    /// Returns [`config::ConfigError`] when a source cannot be read or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database.path", DEFAULT_DB_PATH)?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("database.run_migrations", true)?
            .add_source(config::File::with_name("stockdesk").required(false))
            .add_source(env_overrides())
            .build()?
            .try_deserialize()
    }
}

/// Environment source for `STOCKDESK_` overrides
///
/// Nesting levels are separated by a double underscore so that keys
/// containing a single underscore stay addressable:
/// `STOCKDESK_DATABASE__MAX_CONNECTIONS` maps to
/// `database.max_connections`.
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("STOCKDESK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
