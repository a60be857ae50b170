//! Form snapshots, field validation, and the form-to-entity mapper
//!
//! The shell reads its text widgets once per submission into a
//! [`FormSnapshot`]; everything after that point works on plain strings.
//! [`build_department`] either returns a fully populated entity or the
//! complete set of per-field failures, never both.

use std::collections::BTreeMap;
use std::fmt;

use domain::{Department, DepartmentId};
use tracing::debug;

use crate::fields;

/// Message shown under a required field left blank
const MSG_REQUIRED: &str = "Field can't be empty";
/// Message shown under a quantity below zero
const MSG_NEGATIVE_QUANTITY: &str = "Quantity cannot be negative";

/// The department form's validated input fields
///
/// The identifier field is not listed: it parses leniently and never
/// carries a validation message. Variant order is the form's top-to-bottom
/// field order, which is also the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Quantity,
    Description,
}

impl FormField {
    /// Stable key for looking up the field's error label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-submission collection of field validation failures
///
/// Holds at most one message per field; inserting a second message for the
/// same field replaces the first. Iteration follows the form's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// The message recorded for `field`, if any
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check whether `field` has a recorded failure
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of fields with a recorded failure
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check whether no failures are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in form field order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw form field text captured at submit time
///
/// Reading the widgets once into a snapshot keeps the mapper independent
/// of the widget toolkit; the mapper never touches live UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Identifier field text; blank for new records
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub description: String,
}

impl FormSnapshot {
    /// Render entity state back into field text for edit-mode prefill
    ///
    /// Absent identifier and quantity render as empty strings so a
    /// create-mode form starts blank.
    #[must_use]
    pub fn of(department: &Department) -> Self {
        Self {
            id: department
                .id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: department.name.clone(),
            quantity: department
                .quantity
                .map(|quantity| quantity.to_string())
                .unwrap_or_default(),
            description: department.description.clone(),
        }
    }
}

/// Map a form snapshot to a validated department
///
/// Every check runs so one submission reports all of its failures at once:
/// - name: required, blank fails
/// - quantity: required, blank fails; a parsed negative value fails
/// - description: required, blank fails
///
/// The identifier and quantity fields parse leniently: text that is not a
/// number becomes an absent value instead of an error, which is what lets
/// a new-record form with a blank identifier field save. Blank required
/// fields, by contrast, are hard failures. The asymmetry is deliberate.
/// Name and description are carried over exactly as typed.
///
/// # Errors
///
/// The full [`FieldErrors`] collection when any check fails.
pub fn build_department(snapshot: &FormSnapshot) -> Result<Department, FieldErrors> {
    let mut errors = FieldErrors::new();

    let id = fields::try_parse_int(&snapshot.id).map(DepartmentId::new);

    if snapshot.name.trim().is_empty() {
        errors.insert(FormField::Name, MSG_REQUIRED);
    }

    let quantity = fields::try_parse_int(&snapshot.quantity);
    if snapshot.quantity.trim().is_empty() {
        errors.insert(FormField::Quantity, MSG_REQUIRED);
    } else if let Some(value) = quantity {
        if value < 0 {
            errors.insert(FormField::Quantity, MSG_NEGATIVE_QUANTITY);
        }
    }

    if snapshot.description.trim().is_empty() {
        errors.insert(FormField::Description, MSG_REQUIRED);
    }

    if !errors.is_empty() {
        debug!(%errors, "Form rejected");
        return Err(errors);
    }

    let department = Department {
        id,
        name: snapshot.name.clone(),
        quantity,
        description: snapshot.description.clone(),
    };
    debug!(%department, "Form mapped to department");
    Ok(department)
}
