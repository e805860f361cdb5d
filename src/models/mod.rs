//! Data models for the grade book
//!
//! Core abstractions:
//! - Roster: student identifier → display name
//! - Catalog: assignment identifier → (display name, maximum points)
//! - Submissions: (student, assignment) → percent score
//!
//! Every mapping iterates in identifier order, so anything that scans for a
//! "first" entry behaves the same on every run.

pub mod assignment;
pub mod student;
pub mod submission;

pub use assignment::{Assignment, Catalog};
pub use student::{ID_WIDTH, Roster};
pub use submission::{SubmissionKey, Submissions};
