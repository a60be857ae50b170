//! Port definitions for the application layer
//!
//! Ports are the interfaces the surrounding application implements: the
//! persistence store and the windowing shell. Adapters live outside this
//! crate.

mod department_store;
mod form_view;

#[cfg(test)]
pub use department_store::MockDepartmentStore;
pub use department_store::{DepartmentStore, StoreError};
#[cfg(test)]
pub use form_view::MockFormView;
pub use form_view::FormView;
