//! Queries over a loaded [`GradeBook`](crate::gradebook::GradeBook)
//!
//! Every query starts by resolving a free-text display name to an
//! identifier (case-insensitive, first match in identifier order) and ends
//! either with a report or a [`QueryMiss`](crate::error::QueryMiss).

pub mod distribution;
pub mod grade;
pub mod resolve;
pub mod stats;

pub use distribution::{DistributionReport, assignment_distribution};
pub use grade::{AssignmentContribution, DEFAULT_TOTAL_POINTS, GradeReport, student_grade};
pub use resolve::{resolve_assignment, resolve_student};
pub use stats::{StatsReport, assignment_stats};

use crate::error::QueryMiss;
use crate::gradebook::GradeBook;

/// Resolve an assignment by name and collect its scores
///
/// Shared by the statistics and distribution queries.
pub(crate) fn assignment_scores<'a>(
    book: &'a GradeBook,
    name: &str,
) -> Result<(&'a str, Vec<f64>), QueryMiss> {
    let id = resolve_assignment(book.catalog(), name).ok_or(QueryMiss::AssignmentNotFound)?;
    let scores = book.submissions().for_assignment(id);
    if scores.is_empty() {
        return Err(QueryMiss::NoSubmissions);
    }
    Ok((id, scores))
}
