//! Assignment statistics query

use std::fmt;

use serde::Serialize;

use crate::error::QueryMiss;
use crate::gradebook::GradeBook;

/// Minimum, maximum and mean of an assignment's scores
///
/// Each value is truncated toward zero, not rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Resolved assignment identifier
    pub assignment_id: String,
    /// Number of scores the statistics cover
    pub count: usize,
    /// Lowest score
    pub min: i64,
    /// Highest score
    pub max: i64,
    /// Arithmetic mean
    pub avg: i64,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min: {}%", self.min)?;
        writeln!(f, "Avg: {}%", self.avg)?;
        write!(f, "Max: {}%", self.max)
    }
}

/// Compute statistics for the assignment named `name`
///
/// Scores from students missing from the roster are included.
pub fn assignment_stats(book: &GradeBook, name: &str) -> Result<StatsReport, QueryMiss> {
    let (assignment_id, scores) = super::assignment_scores(book, name)?;

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;

    Ok(StatsReport {
        assignment_id: assignment_id.to_string(),
        count: scores.len(),
        min: truncate(min),
        max: truncate(max),
        avg: truncate(avg),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}
