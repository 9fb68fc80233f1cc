//! Serializable run report.
//!
//! The driver collects one [`CaseReport`] per executed case and a
//! [`RunSummary`] of the aggregates; the CLI serializes the whole
//! [`RunReport`] for `--format json`.

use crate::disposition::Disposition;
use serde::{Deserialize, Serialize};

/// Outcome of one test-function invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Ordinal of the test in registration order, 1-based.
    pub test: u32,
    pub group: u32,
    pub case: u32,
    pub group_name: String,
    pub case_name: String,
    /// Number of sub-tests the case declared.
    pub subtests: u32,
    /// Number of failed checks.
    pub errors: u32,
    /// Sub-test number of the first failed check; 0 when none failed.
    pub first_failed_subtest: u32,
    pub disposition: Disposition,
    pub passed: bool,
    pub duration_ms: u64,
}

/// Suite-wide aggregates for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Registered test count.
    pub total_tests: u32,
    /// Tests actually invoked (early stops leave the rest untouched).
    pub executed: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    /// Running sub-test total across all invoked cases.
    pub subtests: u64,
    pub total_errors: u64,
    /// Coordinates of the first failure; all 0 when nothing failed.
    pub first_failed_test: u32,
    pub first_failed_group: u32,
    pub first_failed_case: u32,
    pub first_failed_subtest: u32,
    pub duration_ms: u64,
    /// Overall verdict: true iff `total_errors` is 0.
    pub verdict: bool,
    /// Whether this was a simulated (self-test) run.
    pub simulated: bool,
    /// Whether cases were only summarized, not executed.
    pub summarized: bool,
}

/// Full report for one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// ISO-8601 timestamp supplied by the caller.
    pub timestamp: String,
    pub cases: Vec<CaseReport>,
    pub summary: RunSummary,
}
