//! Assignment catalog

use std::collections::BTreeMap;

use serde::Serialize;

/// A single assignment definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Display name (e.g., "Homework 1")
    pub name: String,
    /// Maximum points this assignment is worth
    pub points: i64,
}

impl Assignment {
    /// Create an assignment
    #[must_use]
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Assignment identifier → definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    assignments: BTreeMap<String, Assignment>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an assignment, replacing any previous definition for the identifier
    pub fn insert(&mut self, id: impl Into<String>, assignment: Assignment) -> Option<Assignment> {
        self.assignments.insert(id.into(), assignment)
    }

    /// Get an assignment by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Assignment> {
        self.assignments.get(id)
    }

    /// Whether the identifier is in the catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.assignments.contains_key(id)
    }

    /// Iterate `(id, assignment)` pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Assignment)> {
        self.assignments.iter().map(|(id, a)| (id.as_str(), a))
    }

    /// Number of assignments
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<I: Into<String>> FromIterator<(I, Assignment)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (I, Assignment)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (id, assignment) in iter {
            catalog.insert(id, assignment);
        }
        catalog
    }
}
