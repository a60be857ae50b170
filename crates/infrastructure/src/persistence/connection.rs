//! SQLite connection pooling
//!
//! One r2d2 pool per database. Every connection the pool opens runs the
//! same pragma set, so foreign keys and the busy timeout hold no matter
//! which pooled connection serves a call.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Pragmas applied to every connection the pool opens
const CONNECTION_PRAGMAS: &str = "
    PRAGMA foreign_keys = ON;
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
";

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool for the configured database
///
/// A `:memory:` path opens a private in-memory database, which tests use.
/// File paths get their parent directories created first.
///
/// # Errors
///
/// Returns [`DatabaseError`] when the pool cannot be built or a pending
/// migration fails.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Opening database");

    let manager =
        file_manager(&config.path)?.with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        crate::persistence::migrations::run_migrations(&conn)?;
    }

    debug!("Database ready");
    Ok(pool)
}

fn file_manager(path: &str) -> Result<SqliteConnectionManager, DatabaseError> {
    if path == ":memory:" {
        return Ok(SqliteConnectionManager::memory());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Migration(format!("Failed to create database directory: {e}"))
            })?;
        }
    }
    Ok(SqliteConnectionManager::file(path))
}
