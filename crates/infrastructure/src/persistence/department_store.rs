//! SQLite department store implementation
//!
//! Implements the `DepartmentStore` port. Calls run on the caller's
//! thread; the pool hands out one connection per call.

use std::sync::Arc;

use application::ports::{DepartmentStore, StoreError};
use domain::{Department, DepartmentId};
use rusqlite::{Row, params};
use tracing::{debug, instrument};

use super::connection::{ConnectionPool, PooledConn};

/// SQLite-backed department store
#[derive(Debug, Clone)]
pub struct SqliteDepartmentStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteDepartmentStore {
    /// Create a store over an existing pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<PooledConn, StoreError> {
        self.pool.get().map_err(to_store_error)
    }
}

impl DepartmentStore for SqliteDepartmentStore {
    #[instrument(skip(self))]
    fn find_all(&self) -> Result<Vec<Department>, StoreError> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, quantity, description
                 FROM departments
                 ORDER BY name",
            )
            .map_err(to_store_error)?;

        let departments = stmt
            .query_map([], row_to_department)
            .map_err(to_store_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_store_error)?;

        debug!(count = departments.len(), "Listed departments");
        Ok(departments)
    }

    #[instrument(skip(self, department), fields(department = %department))]
    fn save_or_update(&self, department: &Department) -> Result<(), StoreError> {
        let conn = self.connection()?;

        match department.id {
            None => {
                let inserted = conn
                    .execute(
                        "INSERT INTO departments (name, quantity, description)
                         VALUES (?1, ?2, ?3)",
                        params![department.name, department.quantity, department.description],
                    )
                    .map_err(to_store_error)?;
                if inserted == 0 {
                    return Err(StoreError::new("Unexpected error: no rows affected"));
                }
                debug!(id = conn.last_insert_rowid(), "Inserted department");
            }
            Some(id) => {
                // Updating a missing key touches no rows; that is not an error
                let updated = conn
                    .execute(
                        "UPDATE departments
                         SET name = ?1, quantity = ?2, description = ?3
                         WHERE id = ?4",
                        params![
                            department.name,
                            department.quantity,
                            department.description,
                            id.value(),
                        ],
                    )
                    .map_err(to_store_error)?;
                debug!(id = id.value(), rows = updated, "Updated department");
            }
        }

        Ok(())
    }
}

/// Convert a database row to a `Department`
fn row_to_department(row: &Row<'_>) -> rusqlite::Result<Department> {
    let id: Option<i32> = row.get(0)?;
    Ok(Department {
        id: id.map(DepartmentId::new),
        name: row.get(1)?,
        quantity: row.get(2)?,
        description: row.get(3)?,
    })
}

fn to_store_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::new(err.to_string())
}
