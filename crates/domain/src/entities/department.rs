//! Department entity - a registry record edited through the department form

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::value_objects::DepartmentId;

/// A single department record
///
/// Identity follows the store key alone: two departments with the same
/// identifier are the same logical record no matter what the remaining
/// fields hold, and two records that were never saved (no identifier yet)
/// also compare equal. An instance is built fresh from form input on each
/// submission and is not mutated once handed to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Department {
    /// Store key; `None` until the first successful insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DepartmentId>,
    /// Display name
    pub name: String,
    /// Stocked item count; absent when the form field did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Free-text description shown in the list view
    pub description: String,
}

impl Department {
    /// Longest name the form's text field accepts
    pub const NAME_MAX_LEN: usize = 30;

    /// Longest description the form's text field accepts
    pub const DESCRIPTION_MAX_LEN: usize = 80;

    /// Create an unsaved department
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: Option<i32>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            description: description.into(),
        }
    }

    /// Attach a store key (edit mode, or after an insert assigned one)
    #[must_use]
    pub const fn with_id(mut self, id: DepartmentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check whether this record has never been saved
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} (#{id})", self.name),
            None => write!(f, "{} (new)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of(department: &Department) -> u64 {
        let mut hasher = DefaultHasher::new();
        department.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_department_is_unsaved() {
        let dept = Department::new("Books", Some(60), "Various titles of major bestsellers");
        assert!(dept.is_new());
        assert_eq!(dept.name, "Books");
        assert_eq!(dept.quantity, Some(60));
        assert_eq!(dept.description, "Various titles of major bestsellers");
    }

    #[test]
    fn with_id_makes_it_saved() {
        let dept = Department::new("Computers", Some(15), "Top computer brands")
            .with_id(DepartmentId::new(2));
        assert!(!dept.is_new());
        assert_eq!(dept.id, Some(DepartmentId::new(2)));
    }

    #[test]
    fn default_is_a_blank_create_mode_record() {
        let dept = Department::default();
        assert!(dept.is_new());
        assert!(dept.name.is_empty());
        assert!(dept.quantity.is_none());
        assert!(dept.description.is_empty());
    }

    #[test]
    fn equality_ignores_everything_but_the_id() {
        let a = Department::new("Books", Some(60), "first").with_id(DepartmentId::new(1));
        let b = Department::new("Electronics", None, "second").with_id(DepartmentId::new(1));
        assert_eq!(a, b);
    }

    #[test]
    fn different_ids_are_different_records() {
        let a = Department::new("Books", None, "x").with_id(DepartmentId::new(1));
        let b = Department::new("Books", None, "x").with_id(DepartmentId::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn two_unsaved_records_compare_equal() {
        let a = Department::new("Books", Some(60), "x");
        let b = Department::new("Electronics", Some(40), "y");
        assert_eq!(a, b);
    }

    #[test]
    fn saved_and_unsaved_differ() {
        let saved = Department::new("Books", None, "x").with_id(DepartmentId::new(1));
        let unsaved = Department::new("Books", None, "x");
        assert_ne!(saved, unsaved);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let a = Department::new("Books", Some(60), "first").with_id(DepartmentId::new(1));
        let b = Department::new("Electronics", None, "second").with_id(DepartmentId::new(1));
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn display_shows_name_and_key_state() {
        let unsaved = Department::new("Books", None, "x");
        assert_eq!(unsaved.to_string(), "Books (new)");

        let saved = unsaved.with_id(DepartmentId::new(4));
        assert_eq!(saved.to_string(), "Books (#4)");
    }

    #[test]
    fn serialization_roundtrip() {
        let dept = Department::new("Electronics", Some(40), "Lots of electronics")
            .with_id(DepartmentId::new(3));

        let json = serde_json::to_string(&dept).unwrap();
        let back: Department = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, Some(DepartmentId::new(3)));
        assert_eq!(back.name, "Electronics");
        assert_eq!(back.quantity, Some(40));
        assert_eq!(back.description, "Lots of electronics");
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_string(&Department::new("Books", None, "x")).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("\"quantity\""));
    }
}
