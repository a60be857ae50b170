//! Persistence module
//!
//! SQLite-based storage for the department registry.

pub mod connection;
pub mod department_store;
pub mod migrations;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use department_store::SqliteDepartmentStore;
