//! Assignment distribution query
//!
//! Produces the raw scores of an assignment for the histogram renderer.

use std::fmt;

use serde::Serialize;

use crate::error::QueryMiss;
use crate::gradebook::GradeBook;
use crate::histogram::Histogram;

/// Raw scores of one assignment, ready to be bucketed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    /// Resolved assignment identifier
    pub assignment_id: String,
    /// Display name of the assignment
    pub assignment_name: String,
    /// Untruncated percent scores, in student identifier order
    pub scores: Vec<f64>,
    /// The scores bucketed on the fixed 50..=100 layout
    pub histogram: Histogram,
}

impl DistributionReport {
    /// Header line followed by the histogram, optionally with coloured bars
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        format!(
            "{} ({} submission(s))\n{}",
            self.assignment_name,
            self.scores.len(),
            self.histogram.render(color)
        )
    }
}

impl fmt::Display for DistributionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Collect the score distribution of the assignment named `name`
pub fn assignment_distribution(
    book: &GradeBook,
    name: &str,
) -> Result<DistributionReport, QueryMiss> {
    let (assignment_id, scores) = super::assignment_scores(book, name)?;
    let assignment_name =
        book.catalog().get(assignment_id).map(|a| a.name.clone()).unwrap_or_default();

    Ok(DistributionReport {
        assignment_id: assignment_id.to_string(),
        assignment_name,
        histogram: Histogram::from_scores(&scores),
        scores,
    })
}
