//! Student roster

use std::collections::BTreeMap;

/// Number of leading characters of a roster line that form the identifier
pub const ID_WIDTH: usize = 3;

/// Student identifier → display name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: BTreeMap<String, String>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student, replacing any previous name for the identifier
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.students.insert(id.into(), name.into())
    }

    /// Get a student's name by identifier
    #[must_use]
    pub fn name(&self, id: &str) -> Option<&str> {
        self.students.get(id).map(String::as_str)
    }

    /// Whether the identifier is on the roster
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    /// Iterate `(id, name)` pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.students.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl<I, N> FromIterator<(I, N)> for Roster
where
    I: Into<String>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        let mut roster = Self::new();
        for (id, name) in iter {
            roster.insert(id, name);
        }
        roster
    }
}
