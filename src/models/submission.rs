//! Submission scores

use std::collections::BTreeMap;

/// Key of a submission: who submitted what
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionKey {
    /// Student identifier
    pub student: String,
    /// Assignment identifier
    pub assignment: String,
}

impl SubmissionKey {
    /// Create a key
    #[must_use]
    pub fn new(student: impl Into<String>, assignment: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            assignment: assignment.into(),
        }
    }
}

/// (student, assignment) → percent score
///
/// Scores are not range-checked; a percent of 105 or -3 is stored as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submissions {
    scores: BTreeMap<SubmissionKey, f64>,
}

impl Submissions {
    /// Create an empty set of submissions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score, returning the score it replaced
    pub fn insert(&mut self, key: SubmissionKey, percent: f64) -> Option<f64> {
        self.scores.insert(key, percent)
    }

    /// Score for a (student, assignment) pair
    #[must_use]
    pub fn get(&self, student: &str, assignment: &str) -> Option<f64> {
        self.scores.get(&SubmissionKey::new(student, assignment)).copied()
    }

    /// All scores recorded for an assignment, in student identifier order
    #[must_use]
    pub fn for_assignment(&self, assignment: &str) -> Vec<f64> {
        self.scores
            .iter()
            .filter(|(k, _)| k.assignment == assignment)
            .map(|(_, &p)| p)
            .collect()
    }

    /// Iterate `(key, percent)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&SubmissionKey, f64)> {
        self.scores.iter().map(|(k, &p)| (k, p))
    }

    /// Number of recorded scores
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no scores are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(SubmissionKey, f64)> for Submissions {
    fn from_iter<T: IntoIterator<Item = (SubmissionKey, f64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}
