//! Integration tests for the service-result CLI
//!
//! These tests run the binary against response documents on disk and on
//! stdin, with HOME pointed at a scratch directory so no user config leaks in.


use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a service-result command with an isolated HOME
fn service_result(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("service-result"));
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Helper to write a response document into the temp dir
fn write_response(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("Failed to write response");
    path
}

const PAGED: &str = r#"{
    "status": 200,
    "body": [1, 2, 3],
    "headers": {"x-paging-start": 0, "x-paging-limit": 24, "x-paging-total": 3}
}"#;

const UNPROCESSABLE: &str = r#"{
    "status": 422,
    "statusCode": 422,
    "body": {"email": ["is invalid"]},
    "headers": {"x-flash-type": "error", "x-flash-message": "Please fix the form"}
}"#;

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("service-result"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize HTTP client responses"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("service-result v"));
}

#[test]
fn test_normalize_json_output() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "paged.json", PAGED);

    let output = service_result(temp.path())
        .args(["--json", "normalize"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(json["result"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["paging"], serde_json::json!({"start": 0, "limit": 24, "total": 3}));
    assert_eq!(json["validationErrors"], serde_json::json!({}));
}

#[test]
fn test_normalize_reads_stdin() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .args(["normalize", "-"])
        .write_stdin(PAGED)
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: success"))
        .stdout(predicate::str::contains("Paging: start=0 limit=24 total=3"));
}

#[test]
fn test_normalize_with_error() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "422.json", UNPROCESSABLE);

    service_result(temp.path())
        .args(["normalize", "--error", "Boom"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: failure"))
        .stdout(predicate::str::contains("Error: Boom"))
        .stdout(predicate::str::contains("Flash: [error] Please fix the form"));
}

#[test]
fn test_normalize_with_error_json() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "422.json", UNPROCESSABLE);

    let output = service_result(temp.path())
        .args(["--json", "normalize", "--error-json", r#"{"message": "Unprocessable"}"#])
        .arg(&file)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["success"], serde_json::json!(false));
    assert_eq!(json["errorMessage"], serde_json::json!("Unprocessable"));
    assert_eq!(json["statusCode"], serde_json::json!(422));
}

#[test]
fn test_error_flags_conflict() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .args(["normalize", "--error", "a", "--error-json", "\"b\""])
        .write_stdin("{}")
        .assert()
        .failure();
}

#[test]
fn test_invalid_document_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "bad.json", "not json");

    service_result(temp.path())
        .arg("normalize")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read response"));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    service_result(temp.path())
        .args(["paging", "does-not-exist.json"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_paging_command() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "paged.json", PAGED);

    service_result(temp.path())
        .arg("paging")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paging: start=0 limit=24 total=3"));
}

#[test]
fn test_flash_command_without_headers() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "paged.json", PAGED);

    service_result(temp.path())
        .arg("flash")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No flash message."));
}

#[test]
fn test_validation_errors_command() {
    let temp = TempDir::new().unwrap();
    let file = write_response(temp.path(), "422.json", UNPROCESSABLE);

    service_result(temp.path())
        .arg("validation-errors")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("email: [\"is invalid\"]"));
}
