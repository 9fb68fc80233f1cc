//! CLI argument tests.

use super::casebench;
use predicates::prelude::*;

#[test]
fn test_arg_help() {
    casebench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unit-test harness runner with a built-in self-check suite",
        ));
}

#[test]
fn test_arg_version() {
    casebench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("casebench"));
}

#[test]
fn test_arg_invalid_format() {
    casebench()
        .args(["--format", "xml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid format"));
}

#[test]
fn test_arg_valid_format_table() {
    casebench().args(["--format", "table"]).assert().success();
}

#[test]
fn test_arg_valid_format_json() {
    casebench().args(["--format", "json"]).assert().success();
}

#[test]
fn test_arg_unknown_flag() {
    casebench()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
