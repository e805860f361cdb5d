//! The grade book: roster, catalog and submissions for one run
//!
//! A `GradeBook` is built once from the input files and then only read.
//! Every query takes it by shared reference.

use crate::config::DataPaths;
use crate::error::LoadError;
use crate::loader::{self, GroupPolicy};
use crate::models::{Catalog, Roster, SubmissionKey, Submissions};

/// In-memory aggregate of the three input sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeBook {
    roster: Roster,
    catalog: Catalog,
    submissions: Submissions,
}

impl GradeBook {
    /// Assemble a grade book from already-loaded parts
    #[must_use]
    pub const fn new(roster: Roster, catalog: Catalog, submissions: Submissions) -> Self {
        Self {
            roster,
            catalog,
            submissions,
        }
    }

    /// Load all three sources from disk
    ///
    /// The first failing source aborts the load.
    pub fn load(paths: &DataPaths, policy: GroupPolicy) -> Result<Self, LoadError> {
        let roster = loader::load_roster(&paths.students)?;
        let catalog = loader::load_catalog(&paths.assignments, policy)?;
        let submissions = loader::load_submissions(&paths.submissions)?;

        let book = Self::new(roster, catalog, submissions);
        for key in book.dangling_submissions() {
            log::debug!(
                "Submission ({}, {}) references an unknown student or assignment",
                key.student,
                key.assignment
            );
        }
        Ok(book)
    }

    /// The student roster
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The assignment catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All recorded submissions
    #[must_use]
    pub const fn submissions(&self) -> &Submissions {
        &self.submissions
    }

    /// Submissions whose student is not on the roster or whose assignment is
    /// not in the catalog
    ///
    /// These are kept as loaded. Assignment statistics still count a score
    /// from a student missing from the roster.
    #[must_use]
    pub fn dangling_submissions(&self) -> Vec<&SubmissionKey> {
        self.submissions
            .iter()
            .map(|(key, _)| key)
            .filter(|key| {
                !self.roster.contains(&key.student) || !self.catalog.contains(&key.assignment)
            })
            .collect()
    }
}
