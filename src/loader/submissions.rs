//! Submission loader
//!
//! A submissions directory holds one file per submission, each containing a
//! single `student_id|assignment_id|percent` record. Files are processed in
//! file-name order; if two files score the same (student, assignment) pair
//! the one that sorts last wins.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{LoadError, ParseError};
use crate::models::{SubmissionKey, Submissions};

/// Field separator inside a submission file
const SEPARATOR: char = '|';

/// Outcome of parsing one submission file
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionRecord {
    /// A well-formed record
    Parsed {
        /// Who submitted what
        key: SubmissionKey,
        /// Percent score, not range-checked
        percent: f64,
    },
    /// The file is empty or whitespace only
    Empty,
    /// The record does not have exactly three fields
    WrongFieldCount(usize),
}

/// Parse the contents of one submission file
///
/// Shape mismatches are reported as [`SubmissionRecord`] variants so the
/// caller can skip them. A percent that is not a finite number (including
/// `nan` and `inf`) is an error.
pub fn parse_submission(content: &str) -> Result<SubmissionRecord, ParseError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(SubmissionRecord::Empty);
    }

    let fields: Vec<&str> = content.split(SEPARATOR).map(str::trim).collect();
    let [student, assignment, percent] = fields.as_slice() else {
        return Ok(SubmissionRecord::WrongFieldCount(fields.len()));
    };

    let percent = percent
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ParseError::InvalidPercent {
            value: (*percent).to_string(),
        })?;

    Ok(SubmissionRecord::Parsed {
        key: SubmissionKey::new(*student, *assignment),
        percent,
    })
}

/// Load every submission file directly inside `dir`
///
/// Subdirectories are not descended into.
pub fn load_submissions(dir: &Path) -> Result<Submissions, LoadError> {
    let meta = fs::metadata(dir).map_err(|e| LoadError::read(dir, e))?;
    if !meta.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut submissions = Submissions::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
        match parse_submission(&content).map_err(|e| LoadError::parse(path, e))? {
            SubmissionRecord::Parsed { key, percent } => {
                if let Some(previous) = submissions.insert(key, percent) {
                    log::debug!("{}: replaces earlier score {previous}", path.display());
                }
            },
            SubmissionRecord::Empty => {
                log::debug!("Skipping empty submission {}", path.display());
                skipped += 1;
            },
            SubmissionRecord::WrongFieldCount(n) => {
                log::debug!("Skipping {}: expected 3 fields, found {n}", path.display());
                skipped += 1;
            },
        }
    }

    log::info!(
        "Loaded {} submission(s) from {} ({skipped} skipped)",
        submissions.len(),
        dir.display()
    );
    Ok(submissions)
}
