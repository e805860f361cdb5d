//! Property-based tests for loading and querying
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::fmt::Write as _;

use gradebook::GradeBook;
use gradebook::loader::{GroupPolicy, SubmissionRecord, parse_catalog, parse_roster, parse_submission};
use gradebook::models::{Assignment, Catalog, Roster, SubmissionKey, Submissions};
use gradebook::query::{DEFAULT_TOTAL_POINTS, assignment_stats, resolve_student, student_grade};
use proptest::prelude::*;

proptest! {
    /// Every non-blank roster line yields an entry keyed by its first 3 characters
    #[test]
    fn roster_keys_are_line_prefixes(
        entries in prop::collection::btree_map("[0-9]{3}", "[A-Za-z]{1,8}( [A-Za-z]{1,8})?", 1..20)
    ) {
        let mut content = String::new();
        for (id, name) in &entries {
            let _ = writeln!(content, "{id}{name}\n");
        }
        let roster = parse_roster(&content).unwrap();
        prop_assert_eq!(roster.len(), entries.len());
        for (id, name) in &entries {
            prop_assert_eq!(roster.name(id), Some(name.as_str()));
        }
    }

    /// Every complete triplet yields one catalog entry with its integer points
    #[test]
    fn catalog_triplets_become_entries(
        entries in prop::collection::btree_map("[A-Z][0-9]{1,2}", ("[A-Za-z]{1,10}", 1i64..500), 1..15)
    ) {
        let mut content = String::new();
        for (id, (name, points)) in &entries {
            let _ = write!(content, "{name}\n{id}\n{points}\n\n");
        }
        let catalog = parse_catalog(&content, GroupPolicy::Strict).unwrap();
        prop_assert_eq!(catalog.len(), entries.len());
        for (id, (name, points)) in &entries {
            prop_assert_eq!(catalog.get(id), Some(&Assignment::new(name.as_str(), *points)));
        }
    }

    /// A well-formed record parses back to its fields
    #[test]
    fn submission_record_fields(
        student in "[0-9]{3}",
        assignment in "[A-Z][0-9]",
        percent in 0u32..=100,
    ) {
        let record = parse_submission(&format!(" {student} | {assignment} | {percent} ")).unwrap();
        prop_assert_eq!(
            record,
            SubmissionRecord::Parsed {
                key: SubmissionKey::new(student, assignment),
                percent: f64::from(percent),
            }
        );
    }

    /// Name resolution ignores case
    #[test]
    fn resolution_is_case_insensitive(name in "[A-Za-z]{1,12}( [A-Za-z]{1,12})?") {
        let roster: Roster = [("001", name.clone())].into_iter().collect();
        prop_assert_eq!(resolve_student(&roster, &name.to_uppercase()), Some("001"));
        prop_assert_eq!(resolve_student(&roster, &name.to_lowercase()), Some("001"));
    }

    /// Min <= avg <= max
    #[test]
    fn stats_are_ordered(
        scores in prop::collection::vec((0u32..=200).prop_map(|h| f64::from(h) / 2.0), 1..30)
    ) {
        let roster = Roster::new();
        let catalog: Catalog = [("A1", Assignment::new("HW1", 100))].into_iter().collect();
        let submissions: Submissions = scores
            .iter()
            .enumerate()
            .map(|(i, &p)| (SubmissionKey::new(format!("{i:03}"), "A1"), p))
            .collect();
        let book = GradeBook::new(roster, catalog, submissions);

        let stats = assignment_stats(&book, "hw1").unwrap();
        prop_assert!(stats.min <= stats.avg);
        prop_assert!(stats.avg <= stats.max);
        prop_assert_eq!(stats.count, scores.len());
    }

    /// A student with no submissions always grades 0, whatever the catalog
    #[test]
    fn no_submissions_grades_zero(points in prop::collection::vec(1i64..500, 0..10)) {
        let roster: Roster = [("001", "Alice")].into_iter().collect();
        let catalog: Catalog = points
            .iter()
            .enumerate()
            .map(|(i, &p)| (format!("A{i}"), Assignment::new(format!("Assignment {i}"), p)))
            .collect();
        let book = GradeBook::new(roster, catalog, Submissions::new());

        let report = student_grade(&book, "alice", DEFAULT_TOTAL_POINTS).unwrap();
        prop_assert_eq!(report.grade, 0);
    }
}
