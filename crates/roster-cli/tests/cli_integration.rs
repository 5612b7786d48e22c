//! Integration tests for roster-cli.
//!
//! Each test gets its own storage file, so they can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster(storage_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--storage")
        .arg(storage_dir.path().join("employees.json"));
    cmd
}

fn create(
    storage_dir: &TempDir,
    email: &str,
    country: &str,
    salary: &str,
) -> assert_cmd::assert::Assert {
    roster(storage_dir)
        .args([
            "create", "--email", email, "--country", country, "--salary", salary,
        ])
        .assert()
}

#[test]
fn help_lists_both_operations() {
    Command::cargo_bin("roster")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn create_then_get_round_trips() {
    let dir = TempDir::new().unwrap();

    let created = create(&dir, "jane.doe@example.com", "CA", "250")
        .success()
        .stdout(predicate::str::contains("\"version\": 0"))
        .stdout(predicate::str::contains("jane.doe@example.com"));

    // Pull the generated id out of the JSON body.
    let stdout = String::from_utf8(created.get_output().stdout.clone()).unwrap();
    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = record["id"].as_str().unwrap().to_string();

    roster(&dir)
        .args(["get", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("jane.doe@example.com"))
        .stdout(predicate::str::contains(&id));
}

#[test]
fn disallowed_country_and_bad_salary_report_together() {
    let dir = TempDir::new().unwrap();

    create(&dir, "a@b.com", "ES", "500")
        .failure()
        .code(5)
        .stderr(predicate::str::contains("COUNTRY_NOT_ALLOWED"))
        .stderr(predicate::str::contains("SALARY_OUT_OF_RANGE"))
        .stderr(predicate::str::contains("allowedCountries"));

    // Nothing may have been written.
    assert!(!dir.path().join("employees.json").exists());
}

#[test]
fn duplicate_email_fails_validation() {
    let dir = TempDir::new().unwrap();

    create(&dir, "jane.doe@example.com", "CA", "250").success();
    create(&dir, "jane.doe@example.com", "USA", "260")
        .failure()
        .code(5)
        .stderr(predicate::str::contains("EMAIL_ALREADY_EXISTS"));
}

#[test]
fn get_on_a_missing_id_is_not_found() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .args(["get", "00000000-0000-0000-0000-000000000000"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("NotFound"))
        .stderr(predicate::str::contains("Employee"));
}

#[test]
fn malformed_id_is_rejected_by_argument_parsing() {
    let dir = TempDir::new().unwrap();

    roster(&dir)
        .args(["get", "not-a-uuid"])
        .assert()
        .failure()
        .code(2);
}
