//! Tests for loading a whole grade book

use gradebook::GradeBook;
use gradebook::error::LoadError;
use gradebook::loader::GroupPolicy;
use gradebook::models::SubmissionKey;

use crate::common::TestData;

#[test]
fn loads_all_three_sources() {
    let data = TestData::new();
    let book = data.book();
    assert_eq!(book.roster().len(), 4);
    assert_eq!(book.catalog().len(), 4);
    assert_eq!(book.submissions().len(), 7);
}

#[test]
fn dangling_references_are_loaded_and_reported() {
    let data = TestData::new();
    data.write_submission("099-A1.txt", "099|A1|100");
    data.write_submission("001-X9.txt", "001|X9|50");
    let book = data.book();

    assert_eq!(book.submissions().len(), 9);
    let dangling = book.dangling_submissions();
    assert_eq!(dangling, vec![&SubmissionKey::new("001", "X9"), &SubmissionKey::new("099", "A1")]);
}

#[test]
fn strict_policy_fails_the_whole_load() {
    let data = TestData::new();
    data.write_assignments("Quiz\nQ1\n10\nExtra\n");
    assert!(GradeBook::load(&data.paths(), GroupPolicy::Lenient).is_ok());
    let err = GradeBook::load(&data.paths(), GroupPolicy::Strict).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn missing_roster_fails_the_load() {
    let data = TestData::new();
    std::fs::remove_file(data.students_path()).unwrap();
    let err = GradeBook::load(&data.paths(), GroupPolicy::Lenient).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}
