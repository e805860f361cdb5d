//! Case-insensitive name resolution
//!
//! Names are compared after Unicode lowercasing of both sides. When two
//! entries share a name the one with the lowest identifier wins, because
//! mappings iterate in identifier order. Ambiguity is not reported.

use crate::models::{Catalog, Roster};

/// Find the identifier of the student named `name`
#[must_use]
pub fn resolve_student<'a>(roster: &'a Roster, name: &str) -> Option<&'a str> {
    first_match(roster.iter(), name)
}

/// Find the identifier of the assignment named `name`
#[must_use]
pub fn resolve_assignment<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a str> {
    first_match(catalog.iter().map(|(id, a)| (id, a.name.as_str())), name)
}

/// First `(id, display name)` entry whose name equals `name` ignoring case
fn first_match<'a>(
    mut entries: impl Iterator<Item = (&'a str, &'a str)>,
    name: &str,
) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    entries.find(|(_, candidate)| candidate.to_lowercase() == wanted).map(|(id, _)| id)
}
