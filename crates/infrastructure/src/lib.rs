//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the SQLite
//! department store, plus configuration loading and log setup for the
//! surrounding application.

pub mod config;
pub mod persistence;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig};
pub use persistence::{ConnectionPool, SqliteDepartmentStore, create_pool};
pub use telemetry::{TelemetryConfig, init_telemetry};
