//! Department persistence port
//!
//! Forms and list views talk to storage through this trait; adapters in
//! the infrastructure layer implement it. Calls block on the caller's
//! thread, matching the single-threaded event loop that drives them.

use domain::Department;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Error raised by a store adapter
///
/// The message is shown verbatim in the failure alert, so adapters keep it
/// human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create a store error carrying a display message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Port for department persistence
#[cfg_attr(test, automock)]
pub trait DepartmentStore {
    /// Every department, ordered by name
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying store cannot be read.
    fn find_all(&self) -> Result<Vec<Department>, StoreError>;

    /// Insert a department without a key, update one that has a key
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write fails.
    fn save_or_update(&self, department: &Department) -> Result<(), StoreError>;
}
