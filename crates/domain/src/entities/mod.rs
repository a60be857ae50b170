//! Domain entities - Objects with identity and lifecycle

mod department;

pub use department::Department;
