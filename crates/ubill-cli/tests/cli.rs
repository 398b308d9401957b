//! End-to-end smoke tests for the `ubill` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ubill() -> Command {
    Command::cargo_bin("ubill").unwrap()
}

#[test]
fn test_extract_missing_input_fails() {
    ubill()
        .args(["extract", "no-such-file.pdf", "--non-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_extract_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.pdf");
    std::fs::write(&input, "plain text, not a PDF").unwrap();

    ubill()
        .arg("extract")
        .arg(&input)
        .arg("--non-interactive")
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn test_config_show_prints_defaults() {
    ubill()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Name"))
        .stdout(predicate::str::contains("extracted_data.csv"));
}

#[test]
fn test_config_init_writes_file_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ubill.json");

    ubill()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    ubill()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_path_honors_global_flag() {
    ubill()
        .args(["--config", "custom.json", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}
