//! Application services - form workflows

mod department_form;

pub use department_form::DepartmentForm;
