//! Error types for loading and querying the grade book
//!
//! Load-time failures (`ParseError`, `LoadError`) are fatal to a run.
//! Query misses (`QueryMiss`) are expected outcomes that end a single query
//! and are shown to the user as plain output.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed record found while parsing an input file's contents
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A non-blank roster line is shorter than the identifier width
    #[error("line {line}: expected at least 3 characters, found {content:?}")]
    LineTooShort {
        /// 1-based line number in the source
        line: usize,
        /// The offending (trimmed) line
        content: String,
    },

    /// The points line of an assignment group is not an integer
    #[error("line {line}: points must be an integer, found {value:?}")]
    InvalidPoints {
        /// 1-based index of the line among non-blank lines
        line: usize,
        /// The text that failed to parse
        value: String,
    },

    /// The assignment file ends with a group of fewer than 3 lines
    #[error("incomplete assignment group: {trailing} trailing line(s)")]
    IncompleteGroup {
        /// Number of lines left over after the last full group
        trailing: usize,
    },

    /// The percent field of a submission is not a number
    #[error("percent must be a number, found {value:?}")]
    InvalidPercent {
        /// The text that failed to parse
        value: String,
    },
}

/// A failure while loading one of the input sources
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The source was read but its contents are malformed
    #[error("{path}: {source}")]
    Parse {
        /// Path of the malformed source
        path: PathBuf,
        /// What was wrong with it
        #[source]
        source: ParseError,
    },

    /// The submissions path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Error enumerating the submissions directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl LoadError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// A query that finished without producing a value
///
/// The display strings are the exact messages printed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryMiss {
    /// No roster entry has the requested name
    #[error("Student not found")]
    StudentNotFound,

    /// No catalog entry has the requested name
    #[error("Assignment not found")]
    AssignmentNotFound,

    /// The assignment exists but nobody submitted it
    #[error("No submissions found")]
    NoSubmissions,
}
