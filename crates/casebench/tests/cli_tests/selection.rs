//! Group/case/sub-test selection tests.

use super::casebench;
use predicates::prelude::*;

#[test]
fn test_group_filter_skips_other_groups() {
    // Group 1 has two cases; the other four cases are skipped.
    casebench()
        .args(["--no-color", "--group", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 passed; 0 failed; 4 skipped"));
}

#[test]
fn test_group_filter_by_name() {
    casebench()
        .args(["--no-color", "--group-name", "strings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 passed; 0 failed; 4 skipped"));
}

#[test]
fn test_unmatched_group_skips_everything() {
    casebench()
        .args(["--no-color", "--group", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 passed; 0 failed; 6 skipped"));
}

#[test]
fn test_case_filter_selects_across_groups() {
    // Every group has a case numbered 1; the two case-2 entries skip.
    casebench()
        .args(["--no-color", "--case", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 passed; 0 failed; 2 skipped"));
}

#[test]
fn test_group_and_case_filters_combine() {
    casebench()
        .args(["--no-color", "--group", "1", "--case", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed; 0 failed; 5 skipped"));
}

#[test]
fn test_subtest_filter_still_declares_every_subtest() {
    // The filter gates execution, not declaration, so the sub-test total
    // is unchanged.
    casebench()
        .args(["--no-color", "--subtest", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 sub-tests"));
}

#[test]
fn test_skipped_cases_are_marked_in_progress_output() {
    casebench()
        .args(["--no-color", "--group", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... skipped"));
}

#[test]
fn test_selection_keeps_failure_out_of_the_run() {
    // Selecting group 1 skips the failure-injection case entirely.
    casebench()
        .args(["--no-color", "--group", "1", "--force-failure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));
}
