//! Integration tests for the gradebook CLI
//!
//! These tests run the binary against a complete data directory, both
//! through the interactive menu and through the query subcommands.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a gradebook command
fn gradebook() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("gradebook"))
}

/// Helper to write the standard course under `data/`
fn setup_course() -> TempDir {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(data.join("submissions")).unwrap();

    fs::write(data.join("students.txt"), "001Alice Adams\n002 Bob Smith\n003Carol Chen\n").unwrap();
    fs::write(
        data.join("assignments.txt"),
        "Homework 1\nA1\n100\n\nHomework 2\nA2\n200\n\nMidterm\nM1\n300\n\nFinal\nF1\n400\n",
    )
    .unwrap();

    for (name, content) in [
        ("1.txt", "001|A1|80"),
        ("2.txt", "001|A2|90"),
        ("3.txt", "001|M1|70"),
        ("4.txt", "001|F1|85"),
        ("5.txt", "002|A1|70"),
        ("6.txt", "002|A2|85.5"),
        ("7.txt", "003|A1|90"),
        ("readme.txt", "not a submission"),
    ] {
        fs::write(data.join("submissions").join(name), content).unwrap();
    }

    temp
}

// =============================================================================
// INTERACTIVE MENU
// =============================================================================

#[test]
fn test_menu_student_grade() {
    let temp = setup_course();

    gradebook()
        .current_dir(temp.path())
        .write_stdin("1\nALICE adams\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Student grade"))
        .stdout(predicate::str::contains("What is the student's name: "))
        .stdout(predicate::str::contains("81%"));
}

#[test]
fn test_menu_assignment_stats() {
    let temp = setup_course();

    gradebook()
        .current_dir(temp.path())
        .write_stdin("2\nhomework 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Min: 70%\nAvg: 80%\nMax: 90%"));
}

#[test]
fn test_menu_assignment_graph() {
    let temp = setup_course();

    gradebook()
        .current_dir(temp.path())
        .write_stdin("3\nHomework 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Homework 1 (3 submission(s))"))
        .stdout(predicate::str::contains("100 +"));
}

#[test]
fn test_menu_invalid_selection() {
    let temp = setup_course();

    gradebook()
        .current_dir(temp.path())
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid selection"));
}

#[test]
fn test_menu_not_found_is_not_a_failure() {
    let temp = setup_course();

    gradebook()
        .current_dir(temp.path())
        .write_stdin("1\nMallory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student not found"));
}

// =============================================================================
// SUBCOMMANDS
// =============================================================================

#[test]
fn test_grade_subcommand_joins_words() {
    let temp = setup_course();

    gradebook()
        .args(["grade", "bob", "smith"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("24%\n"));
}

#[test]
fn test_stats_subcommand_json() {
    let temp = setup_course();

    let output = gradebook()
        .args(["--json", "stats", "Homework 2"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["min"], 85);
    assert_eq!(value["avg"], 87);
    assert_eq!(value["max"], 90);
}

#[test]
fn test_no_submissions() {
    let temp = setup_course();

    gradebook()
        .args(["stats", "Midterm"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Min: 70%"));

    fs::remove_file(temp.path().join("data/submissions/3.txt")).unwrap();

    gradebook()
        .args(["stats", "Midterm"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("No submissions found\n"));
}

#[test]
fn test_explicit_data_paths() {
    let temp = setup_course();
    let elsewhere = TempDir::new().unwrap();
    let data = temp.path().join("data");

    gradebook()
        .args(["grade", "Carol Chen", "--students"])
        .arg(data.join("students.txt"))
        .arg("--assignments")
        .arg(data.join("assignments.txt"))
        .arg("--submissions")
        .arg(data.join("submissions"))
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("9%"));
}

#[test]
fn test_config_file_total_points() {
    let temp = setup_course();
    fs::write(temp.path().join("gradebook.toml"), "[grading]\ntotal_points = 100\n").unwrap();

    gradebook()
        .args(["grade", "Carol", "Chen"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("90%"));
}

#[test]
fn test_config_subcommand_shows_overrides() {
    let temp = setup_course();

    gradebook()
        .args(["--strict", "config"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("groups = \"strict\""))
        .stdout(predicate::str::contains("total_points = 1000"));
}

// =============================================================================
// LOAD ERRORS
// =============================================================================

#[test]
fn test_missing_data_fails() {
    let temp = TempDir::new().unwrap();

    gradebook()
        .args(["grade", "Alice"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to load grade book"));
}

#[test]
fn test_bad_points_fails() {
    let temp = setup_course();
    fs::write(temp.path().join("data/assignments.txt"), "Quiz\nQ1\nten\n").unwrap();

    gradebook()
        .write_stdin("1\nAlice Adams\n")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("points must be an integer"));
}

#[test]
fn test_strict_flag_rejects_partial_group() {
    let temp = setup_course();
    fs::write(temp.path().join("data/assignments.txt"), "Quiz\nQ1\n10\nExtra\n").unwrap();

    gradebook().args(["grade", "Alice", "Adams"]).current_dir(temp.path()).assert().success();

    gradebook()
        .args(["--strict", "grade", "Alice", "Adams"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("incomplete assignment group"));
}

#[test]
fn test_version() {
    gradebook()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook v"));
}
