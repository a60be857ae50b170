//! Domain layer for Stockdesk
//!
//! Contains the records the application edits and their value objects.
//! This layer has no knowledge of forms, storage, or the windowing shell.

pub mod entities;
pub mod value_objects;

pub use entities::Department;
pub use value_objects::DepartmentId;
