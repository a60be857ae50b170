//! Database migrations
//!
//! Embedded migrations run linearly at startup. The `schema_version`
//! table records the last version applied; each migration is recorded as
//! soon as it completes, so a failure partway leaves the version at the
//! last migration that fully applied.
//!
//! To add a migration, write a `migrate_vX` function and append
//! `(X, migrate_vX)` to [`MIGRATIONS`].

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Every migration, in the order it must apply
const MIGRATIONS: &[(i32, fn(&Connection) -> Result<(), DatabaseError>)] = &[(1, migrate_v1)];

/// Run all pending migrations
///
/// # Errors
///
/// Returns [`DatabaseError`] when a migration statement fails.
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current = recorded_version(conn)?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|(version, _)| *version > current)
        .collect();
    if pending.is_empty() {
        debug!(version = current, "Database schema is up to date");
        return Ok(());
    }

    info!(
        from_version = current,
        pending = pending.len(),
        "Running database migrations"
    );

    for (version, apply) in pending {
        if let Err(e) = apply(conn) {
            error!(version, error = %e, "Migration failed");
            return Err(e);
        }
        record_version(conn, *version)?;
        info!(version, "Migration applied");
    }

    Ok(())
}

/// Read the last applied version, creating the bookkeeping table first
fn recorded_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record `version` as the last applied migration
fn record_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Version 1: the department registry
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: departments");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS departments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            quantity INTEGER,
            description TEXT NOT NULL
        );

        -- List views read in name order
        CREATE INDEX IF NOT EXISTS idx_departments_name ON departments(name);
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latest_version() -> i32 {
        MIGRATIONS.last().map_or(0, |(version, _)| *version)
    }

    fn migrated_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn creates_the_departments_table() {
        let conn = migrated_connection();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"departments".to_string()));
        assert!(tables.contains(&"schema_version".to_string()));
    }

    #[test]
    fn running_twice_changes_nothing() {
        let conn = migrated_connection();
        run_migrations(&conn).unwrap();
        assert_eq!(recorded_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn records_the_latest_version() {
        let conn = migrated_connection();
        assert_eq!(recorded_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn versions_are_strictly_increasing() {
        let versions: Vec<_> = MIGRATIONS.iter().map(|(version, _)| *version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(versions, sorted);
        assert_eq!(versions.first(), Some(&1));
    }

    #[test]
    fn quantity_column_is_nullable() {
        let conn = migrated_connection();

        conn.execute(
            "INSERT INTO departments (name, quantity, description)
             VALUES ('Books', NULL, 'Bestsellers')",
            [],
        )
        .unwrap();

        let quantity: Option<i32> = conn
            .query_row(
                "SELECT quantity FROM departments WHERE name = 'Books'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(quantity.is_none());
    }

    #[test]
    fn name_and_description_are_required() {
        let conn = migrated_connection();

        let no_name = conn.execute(
            "INSERT INTO departments (name, quantity, description) VALUES (NULL, 1, 'x')",
            [],
        );
        assert!(no_name.is_err());

        let no_description = conn.execute(
            "INSERT INTO departments (name, quantity, description) VALUES ('Books', 1, NULL)",
            [],
        );
        assert!(no_description.is_err());
    }

    #[test]
    fn keys_autoincrement_from_one() {
        let conn = migrated_connection();

        for (name, quantity) in [("Books", 60), ("Computers", 15)] {
            conn.execute(
                "INSERT INTO departments (name, quantity, description) VALUES (?1, ?2, 'x')",
                rusqlite::params![name, quantity],
            )
            .unwrap();
        }

        let ids: Vec<i64> = conn
            .prepare("SELECT id FROM departments ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }
}
