//! Built-in self-check suite.
//!
//! A small set of test functions exercising the harness's own machinery:
//! equality checks, lap timing, and a deliberate failure behind the
//! `force_failure` flag so the failure paths can be driven on demand.

use casebench_core::{Config, Status, Suite};
use std::time::Duration;

/// Group numbers used by the self-check suite.
pub mod groups {
    pub const MATH: u32 = 1;
    pub const STRINGS: u32 = 2;
    pub const TIMING: u32 = 3;
    pub const FAILURE: u32 = 4;
}

/// Register every self-check test function, in run order.
pub fn register(suite: &mut Suite) {
    suite.load(math_addition);
    suite.load(math_comparison);
    suite.load(strings_equality);
    suite.load(strings_transform);
    suite.load(timing_lap);
    suite.load(failure_injection);
}

fn math_addition(config: &Config) -> Status {
    let mut status = Status::init(config, groups::MATH, 1, "math", "addition");
    if !status.active() {
        return status;
    }
    if status.next_subtest("adds small integers") {
        status.check_int(4, 2 + 2);
    }
    if status.next_subtest("adds negatives") {
        status.check_int(-2, -1 + -1);
    }
    if status.next_subtest("zero is the identity") {
        let zero = 0;
        status.check_int(7, 7 + zero);
    }
    status
}

fn math_comparison(config: &Config) -> Status {
    let mut status = Status::init(config, groups::MATH, 2, "math", "comparison");
    if !status.active() {
        return status;
    }
    if status.next_subtest("ordering holds") {
        status.check_bool(true, 3 < 5);
    }
    if status.next_subtest("distinct values differ") {
        status.check_bool(false, 3 == 5);
    }
    status
}

fn strings_equality(config: &Config) -> Status {
    let mut status = Status::init(config, groups::STRINGS, 1, "strings", "equality");
    if !status.active() {
        return status;
    }
    if status.next_subtest("identical literals") {
        status.check_str("casebench", "casebench");
    }
    if status.next_subtest("formatted concatenation") {
        status.check_str("group 2", &format!("group {}", groups::STRINGS));
    }
    status
}

fn strings_transform(config: &Config) -> Status {
    let mut status = Status::init(config, groups::STRINGS, 2, "strings", "transform");
    if !status.active() {
        return status;
    }
    if status.next_subtest("uppercase") {
        status.check_str("CASE", &"case".to_uppercase());
    }
    if status.next_subtest("trim") {
        status.check_str("case", "  case  ".trim());
    }
    status
}

fn timing_lap(config: &Config) -> Status {
    let mut status = Status::init(config, groups::TIMING, 1, "timing", "lap timing");
    if !status.active() {
        return status;
    }
    if status.next_subtest("lap resets the start point") {
        status.time_delta(true);
        let lap = status.time_delta(false);
        status.check(lap <= Duration::from_secs(5));
    }
    status
}

fn failure_injection(config: &Config) -> Status {
    let mut status = Status::init(config, groups::FAILURE, 1, "failure", "injection");
    if !status.active() {
        return status;
    }
    if status.next_subtest("injection point") {
        if config.force_failure {
            status.fail_deliberately();
        } else {
            status.check(true);
        }
    }
    status
}
