//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn radon() -> Command {
    Command::cargo_bin("radon").unwrap()
}

#[test]
fn test_help_lists_commands() {
    radon()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("process")
                .and(predicate::str::contains("batch"))
                .and(predicate::str::contains("export")),
        );
}

#[test]
fn test_process_missing_file_fails() {
    radon()
        .args(["process", "no-such-file.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_batch_with_no_matches_fails() {
    let dir = tempfile::tempdir().unwrap();
    radon()
        .current_dir(dir.path())
        .args(["batch", "*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}

#[test]
fn test_records_list_with_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    radon()
        .current_dir(dir.path())
        .args(["records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records stored."));
}

#[test]
fn test_records_clear_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    radon()
        .current_dir(dir.path())
        .args(["records", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}
