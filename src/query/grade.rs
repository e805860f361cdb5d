//! Student grade query
//!
//! A student's grade is the sum over every catalog assignment of
//! `percent / 100 * max_points`, divided by the course total and expressed
//! as a whole percentage. A missing submission counts as 0 percent.
//!
//! The course total is a fixed convention ([`DEFAULT_TOTAL_POINTS`]), not the
//! sum of the catalog's maximum points. A catalog worth 500 points in total
//! therefore tops out at a 50% grade.

use std::fmt;

use serde::Serialize;

use crate::error::QueryMiss;
use crate::gradebook::GradeBook;

use super::resolve::resolve_student;

/// Points the course is graded out of unless configured otherwise
pub const DEFAULT_TOTAL_POINTS: f64 = 1000.0;

/// A student's overall grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Resolved student identifier
    pub student_id: String,
    /// Display name as stored on the roster
    pub student_name: String,
    /// Weighted points earned across the catalog
    pub points_earned: f64,
    /// Denominator the grade was computed against
    pub total_points: f64,
    /// Rounded grade percentage
    pub grade: i64,
    /// Per-assignment contributions, in assignment identifier order
    pub breakdown: Vec<AssignmentContribution>,
}

/// How much one assignment contributed to a grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentContribution {
    /// Assignment identifier
    pub assignment_id: String,
    /// Assignment display name
    pub name: String,
    /// Maximum points for the assignment
    pub max_points: i64,
    /// Recorded percent, `None` when nothing was submitted
    pub percent: Option<f64>,
    /// Points earned
    pub points: f64,
}

impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.grade)
    }
}

/// Compute the grade of the student named `name`
///
/// `total_points` is the course denominator, normally [`DEFAULT_TOTAL_POINTS`].
pub fn student_grade(
    book: &GradeBook,
    name: &str,
    total_points: f64,
) -> Result<GradeReport, QueryMiss> {
    let roster = book.roster();
    let student_id = resolve_student(roster, name).ok_or(QueryMiss::StudentNotFound)?;

    let breakdown: Vec<AssignmentContribution> = book
        .catalog()
        .iter()
        .map(|(assignment_id, assignment)| {
            let percent = book.submissions().get(student_id, assignment_id);
            #[allow(clippy::cast_precision_loss)]
            let points = percent.unwrap_or(0.0) / 100.0 * assignment.points as f64;
            AssignmentContribution {
                assignment_id: assignment_id.to_string(),
                name: assignment.name.clone(),
                max_points: assignment.points,
                percent,
                points,
            }
        })
        .collect();

    let points_earned: f64 = breakdown.iter().map(|c| c.points).sum();

    Ok(GradeReport {
        student_id: student_id.to_string(),
        student_name: roster.name(student_id).unwrap_or_default().to_string(),
        points_earned,
        total_points,
        grade: round_percent(points_earned / total_points * 100.0),
        breakdown,
    })
}

/// Round half to even
#[allow(clippy::cast_possible_truncation)]
fn round_percent(value: f64) -> i64 {
    value.round_ties_even() as i64
}
