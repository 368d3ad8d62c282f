//! Tests for `codeql-runner flags`

use super::common::{codeql_runner_command, TestContext};
use predicates::prelude::*;

#[test]
fn test_flags_from_arguments() {
    codeql_runner_command()
        .args(["flags", "--ram", "2048", "--threads", "1"])
        .assert()
        .success()
        .stdout("--ram=2048\n--threads=1\n--no-sarif-add-snippets\n");
}

#[test]
fn test_flags_negative_threads() {
    codeql_runner_command()
        .args(["flags", "--ram", "2048", "--threads", "-1", "--add-snippets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--threads=-1"))
        .stdout(predicate::str::contains("--sarif-add-snippets"));
}

#[test]
fn test_flags_default_uses_machine() {
    codeql_runner_command()
        .arg("flags")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^--ram=-?\d+\n--threads=\d+\n--no-sarif-add-snippets\n$").unwrap());
}

#[test]
fn test_flags_invalid_ram() {
    codeql_runner_command()
        .args(["flags", "--ram", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid RAM setting \"abc\", specified.",
        ));
}

#[test]
fn test_flags_invalid_threads() {
    codeql_runner_command()
        .args(["flags", "--threads", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid threads setting \"lots\""));
}

#[test]
fn test_flags_config_file_overridden_by_arguments() {
    let ctx = TestContext::new();
    let config = ctx.write("runner.yml", "ram: 3000\nthreads: 1\nadd_snippets: true\n");

    codeql_runner_command()
        .args(["flags", "--ram", "4000", "--config-file"])
        .arg(&config)
        .assert()
        .success()
        .stdout("--ram=4000\n--threads=1\n--sarif-add-snippets\n");
}

#[test]
fn test_flags_missing_config_file() {
    let ctx = TestContext::new();

    codeql_runner_command()
        .args(["flags", "--config-file"])
        .arg(ctx.temp.path().join("missing.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_flags_json_includes_extra_options() {
    let output = codeql_runner_command()
        .args(["flags", "--ram", "1024", "--threads", "1", "--json"])
        .env("CODEQL_ACTION_EXTRA_OPTIONS", r#"{"database":{"init":["--debug"]}}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ram"], "--ram=1024");
    assert_eq!(value["extra_options"]["database"]["init"][0], "--debug");
}

#[test]
fn test_flags_malformed_extra_options() {
    codeql_runner_command()
        .args(["flags", "--ram", "1024"])
        .env("CODEQL_ACTION_EXTRA_OPTIONS", "{oops")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain valid JSON"));
}
