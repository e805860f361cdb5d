//! Loaders for the three flat-file input sources
//!
//! Each loader is split into a pure `parse_*` step over text and a `load_*`
//! step that reads from disk. Files are read whole and closed before the
//! next one is touched.

pub mod catalog;
pub mod roster;
pub mod submissions;

pub use catalog::{GroupPolicy, load_catalog, parse_catalog};
pub use roster::{load_roster, parse_roster};
pub use submissions::{SubmissionRecord, load_submissions, parse_submission};
