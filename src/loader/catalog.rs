//! Assignment catalog loader
//!
//! After blank lines are dropped, the file is read as consecutive groups of
//! three lines:
//!
//! ```text
//! Homework 1      <- display name
//! A1              <- identifier
//! 100             <- maximum points (integer)
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, ParseError};
use crate::models::{Assignment, Catalog};

/// Lines per assignment group
const GROUP_LEN: usize = 3;

/// What to do with a trailing group of fewer than three lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPolicy {
    /// Drop the partial group and log a warning
    #[default]
    Lenient,
    /// Fail the load
    Strict,
}

/// Parse catalog text into a [`Catalog`]
pub fn parse_catalog(content: &str, policy: GroupPolicy) -> Result<Catalog, ParseError> {
    let lines: Vec<&str> = content.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let trailing = lines.len() % GROUP_LEN;
    if trailing != 0 {
        match policy {
            GroupPolicy::Strict => return Err(ParseError::IncompleteGroup { trailing }),
            GroupPolicy::Lenient => {
                log::warn!("Ignoring incomplete assignment group ({trailing} trailing line(s))");
            },
        }
    }

    let mut catalog = Catalog::new();
    for (group_idx, group) in lines.chunks_exact(GROUP_LEN).enumerate() {
        let [name, id, points] = [group[0], group[1], group[2]];
        let points = points.parse::<i64>().map_err(|_| ParseError::InvalidPoints {
            line: group_idx * GROUP_LEN + GROUP_LEN,
            value: points.to_string(),
        })?;
        if points <= 0 {
            log::warn!("Assignment {id} ({name:?}) has non-positive points: {points}");
        }

        if catalog.insert(id, Assignment::new(name, points)).is_some() {
            log::debug!("catalog: id {id} redefined by {name:?}");
        }
    }

    Ok(catalog)
}

/// Load and parse an assignment catalog file
pub fn load_catalog(path: &Path, policy: GroupPolicy) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
    let catalog = parse_catalog(&content, policy).map_err(|e| LoadError::parse(path, e))?;
    log::info!("Loaded {} assignment(s) from {}", catalog.len(), path.display());
    Ok(catalog)
}
