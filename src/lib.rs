//! gradebook - Student grades and assignment statistics from flat files
//!
//! This library loads a student roster, an assignment catalog and a
//! directory of submission records into a [`GradeBook`](gradebook::GradeBook),
//! and answers three queries over it: a student's weighted grade, an
//! assignment's statistics and an assignment's score distribution.
//!
//! ```
//! use gradebook::gradebook::GradeBook;
//! use gradebook::models::{Assignment, Catalog, Roster, SubmissionKey, Submissions};
//! use gradebook::query::{DEFAULT_TOTAL_POINTS, student_grade};
//!
//! let roster: Roster = [("001", "Alice")].into_iter().collect();
//! let catalog: Catalog = [("A1", Assignment::new("HW1", 100))].into_iter().collect();
//! let submissions: Submissions =
//!     [(SubmissionKey::new("001", "A1"), 80.0)].into_iter().collect();
//!
//! let book = GradeBook::new(roster, catalog, submissions);
//! let report = student_grade(&book, "alice", DEFAULT_TOTAL_POINTS).unwrap();
//! assert_eq!(report.to_string(), "8%");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod gradebook;
pub mod histogram;
pub mod loader;
pub mod menu;
pub mod models;
pub mod output;
pub mod paths;
pub mod query;

pub use crate::gradebook::GradeBook;
