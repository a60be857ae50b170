//! Application layer - Form workflows and orchestration
//!
//! Contains the form-to-entity mapping, field validation, change
//! notification, and the controllers that tie them together. Talks to
//! storage and to the windowing shell only through port traits.

pub mod date_parser;
pub mod fields;
pub mod form;
pub mod format;
pub mod notifier;
pub mod ports;
pub mod services;

pub use date_parser::{DateParseError, accepted_patterns, parse_date};
pub use form::{FieldErrors, FormField, FormSnapshot, build_department};
pub use notifier::{ChangeNotifier, DataChangeListener};
pub use ports::*;
pub use services::*;
