//! Department identifier - the store's integer key for a department record

use std::fmt;

use serde::{Deserialize, Serialize};

/// A department's persistent identifier
///
/// Keys are assigned by the store on first insert, so a record that has
/// never been saved carries no identifier at all (`Option<DepartmentId>`
/// on the entity). The value is opaque to the domain; only the store
/// decides what it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i32);

impl DepartmentId {
    /// Wrap an existing store key
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer key
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DepartmentId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
