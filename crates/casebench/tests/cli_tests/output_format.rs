//! JSON output format tests.

use super::casebench;
use predicates::prelude::*;

fn run_json(extra_args: &[&str]) -> serde_json::Value {
    let output = casebench()
        .args(["--format", "json"])
        .args(extra_args)
        .output()
        .expect("failed to execute");
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_json_output_is_parseable() {
    let report = run_json(&[]);
    assert!(report.get("timestamp").is_some());
    assert_eq!(report["cases"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["summary"]["verdict"], true);
}

#[test]
fn test_json_output_has_no_progress_noise() {
    casebench()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_json_summary_counts() {
    let report = run_json(&[]);
    assert_eq!(report["summary"]["total_tests"], 6);
    assert_eq!(report["summary"]["executed"], 6);
    assert_eq!(report["summary"]["passed"], 6);
    assert_eq!(report["summary"]["failed"], 0);
    assert_eq!(report["summary"]["subtests"], 11);
}

#[test]
fn test_json_failure_coordinates() {
    let output = casebench()
        .args(["--format", "json", "--force-failure"])
        .output()
        .expect("failed to execute");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(report["summary"]["verdict"], false);
    assert_eq!(report["summary"]["first_failed_group"], 4);
    assert_eq!(report["summary"]["first_failed_case"], 1);
    assert_eq!(report["summary"]["first_failed_subtest"], 1);
    let failed_case = &report["cases"][5];
    assert_eq!(failed_case["disposition"], "failed");
    assert_eq!(failed_case["errors"], 1);
}

#[test]
fn test_json_marks_skipped_dispositions() {
    let report = run_json(&["--group", "1"]);
    let dispositions: Vec<&str> = report["cases"]
        .as_array()
        .map(|cases| {
            cases
                .iter()
                .filter_map(|c| c["disposition"].as_str())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        dispositions,
        vec![
            "continue", "continue", "skipped", "skipped", "skipped", "skipped"
        ]
    );
}
