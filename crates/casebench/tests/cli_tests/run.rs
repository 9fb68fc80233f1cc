//! Run behavior tests for the self-check suite.

use super::casebench;
use predicates::prelude::*;

#[test]
fn test_default_run_passes() {
    casebench()
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("running 6 tests"))
        .stdout(predicate::str::contains("test result: ok"))
        .stdout(predicate::str::contains("overall: ok"));
}

#[test]
fn test_default_run_counts_every_subtest() {
    casebench()
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("11 sub-tests"));
}

#[test]
fn test_force_failure_fails_the_run() {
    casebench()
        .args(["--no-color", "--force-failure"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("test result: FAILED"))
        .stdout(predicate::str::contains("1 failed"))
        .stdout(predicate::str::contains("first failure: test 6"));
}

#[test]
fn test_force_failure_reports_coordinates() {
    casebench()
        .args(["--no-color", "--force-failure"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("group 4, case 1, sub-test 1"));
}

#[test]
fn test_quiet_suppresses_stdout() {
    casebench()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_progress_suppresses_stdout() {
    casebench()
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_summarize_executes_nothing() {
    casebench()
        .args(["--no-color", "--summarize", "--force-failure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 tests summarized, not executed"));
}

#[test]
fn test_show_steps_prints_step_lines() {
    casebench()
        .args(["--no-color", "--show-steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1: adds small integers"));
}

#[test]
fn test_batch_preset_runs_unattended() {
    casebench()
        .args(["--no-color", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test result: ok"));
}

#[test]
fn test_require_subtests_accepts_the_selfcheck_suite() {
    casebench()
        .args(["--no-color", "--require-subtests"])
        .assert()
        .success();
}

#[test]
fn test_verbose_table_prints_case_details() {
    casebench()
        .args(["--no-color", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disposition"))
        .stdout(predicate::str::contains("addition"));
}

#[test]
fn test_show_values_prints_expected_and_actual() {
    casebench()
        .args(["--no-color", "--show-values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expected: 4"))
        .stdout(predicate::str::contains("actual:   4"));
}
