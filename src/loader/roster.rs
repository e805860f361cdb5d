//! Roster loader
//!
//! One student per line: the first three characters are the identifier,
//! the rest of the line (trimmed) is the display name.
//!
//! ```
//! use gradebook::loader::parse_roster;
//!
//! let roster = parse_roster("001 Alice Adams\n\n002Bob\n").unwrap();
//! assert_eq!(roster.name("001"), Some("Alice Adams"));
//! assert_eq!(roster.name("002"), Some("Bob"));
//! ```

use std::fs;
use std::path::Path;

use crate::error::{LoadError, ParseError};
use crate::models::{ID_WIDTH, Roster};

/// Parse roster text into a [`Roster`]
///
/// Blank lines are skipped. When an identifier appears twice the later line wins.
pub fn parse_roster(content: &str) -> Result<Roster, ParseError> {
    let mut roster = Roster::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (id, name) = split_id(line).ok_or_else(|| ParseError::LineTooShort {
            line: idx + 1,
            content: line.to_string(),
        })?;

        if let Some(previous) = roster.insert(id, name.trim()) {
            log::debug!("roster: id {id} redefined (was {previous:?})");
        }
    }

    Ok(roster)
}

/// Load and parse a roster file
pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
    let roster = parse_roster(&content).map_err(|e| LoadError::parse(path, e))?;
    log::info!("Loaded {} student(s) from {}", roster.len(), path.display());
    Ok(roster)
}

/// Split a line after its first `ID_WIDTH` characters
fn split_id(line: &str) -> Option<(&str, &str)> {
    if line.chars().count() < ID_WIDTH {
        return None;
    }
    let cut = line.char_indices().nth(ID_WIDTH).map_or(line.len(), |(i, _)| i);
    Some(line.split_at(cut))
}
