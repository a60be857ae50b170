//! Value Objects - Immutable, identity-less domain primitives

mod department_id;

pub use department_id::DepartmentId;
