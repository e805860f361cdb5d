//! Interactive menu
//!
//! Shows the three queries, reads a selection and a name, runs one query and
//! returns. The menu is generic over its streams so it can be driven from
//! tests as well as from a terminal.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::gradebook::GradeBook;
use crate::output::{OutputMode, render_outcome};
use crate::query::{self, DEFAULT_TOTAL_POINTS};

/// Printed when the selection is not one of the menu entries
pub const INVALID_SELECTION: &str = "invalid selection";

const STUDENT_PROMPT: &str = "What is the student's name: ";
const ASSIGNMENT_PROMPT: &str = "What is the assignment name: ";

/// One of the three queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// `1` - a student's overall grade
    StudentGrade,
    /// `2` - min / avg / max of an assignment
    AssignmentStats,
    /// `3` - histogram of an assignment
    AssignmentGraph,
}

impl FromStr for QueryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::StudentGrade),
            "2" => Ok(Self::AssignmentStats),
            "3" => Ok(Self::AssignmentGraph),
            other => Err(format!("{INVALID_SELECTION}: {other:?}")),
        }
    }
}

impl QueryKind {
    /// Prompt asking for the name this query needs
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::StudentGrade => STUDENT_PROMPT,
            Self::AssignmentStats | Self::AssignmentGraph => ASSIGNMENT_PROMPT,
        }
    }
}

/// How query results are computed and shown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Course total used by the grade query
    pub total_points: f64,
    /// Human or JSON output
    pub mode: OutputMode,
    /// Colour histogram bars
    pub color: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            total_points: DEFAULT_TOTAL_POINTS,
            mode: OutputMode::Human,
            color: false,
        }
    }
}

/// Run a query and render its outcome
#[must_use]
pub fn run_query(book: &GradeBook, kind: QueryKind, name: &str, opts: &QueryOptions) -> String {
    log::debug!("Running {kind:?} for {name:?}");
    match kind {
        QueryKind::StudentGrade => render_outcome(
            &query::student_grade(book, name, opts.total_points),
            opts.mode,
            opts.color,
        ),
        QueryKind::AssignmentStats => {
            render_outcome(&query::assignment_stats(book, name), opts.mode, opts.color)
        },
        QueryKind::AssignmentGraph => {
            render_outcome(&query::assignment_distribution(book, name), opts.mode, opts.color)
        },
    }
}

/// Show the menu, read one selection and one name, and print the result
pub fn run_menu<R: BufRead, W: Write>(
    book: &GradeBook,
    opts: &QueryOptions,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "1. Student grade")?;
    writeln!(out, "2. Assignment statistics")?;
    writeln!(out, "3. Assignment graph")?;

    let selection = prompt(input, out, "Enter your selection: ")?;
    let kind = match selection.parse::<QueryKind>() {
        Ok(kind) => kind,
        Err(reason) => {
            log::debug!("{reason}");
            return writeln!(out, "{INVALID_SELECTION}");
        },
    };

    let name = prompt(input, out, kind.prompt())?;
    writeln!(out, "{}", run_query(book, kind, &name, opts))
}

/// Write a prompt and read one trimmed line; end of input reads as empty
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
