//! Per-case status record.
//!
//! One [`Status`] exists per test-function invocation. The test function
//! owns it while it runs (declaring sub-tests and recording check results);
//! ownership then transfers to the driver, which resolves the disposition
//! and folds the record into the suite aggregates.

use crate::config::Config;
use crate::disposition::Disposition;
use crate::prompt::{AfterAction, BeforeAction, Responder, StdinResponder};
use crate::reporter::Reporter;
use std::fmt;
use std::time::{Duration, Instant};

/// Mutable state for one running test case.
pub struct Status {
    config: Config,
    reporter: Reporter,
    group: u32,
    case: u32,
    group_name: String,
    case_name: String,
    subtest: u32,
    subtest_name: String,
    result: bool,
    errors: u32,
    first_failed_subtest: u32,
    disposition: Disposition,
    deliberate: bool,
    started: Instant,
    duration: Duration,
    responder: Option<Box<dyn Responder>>,
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status")
            .field("group", &self.group)
            .field("case", &self.case)
            .field("subtest", &self.subtest)
            .field("result", &self.result)
            .field("errors", &self.errors)
            .field("first_failed_subtest", &self.first_failed_subtest)
            .field("disposition", &self.disposition)
            .finish_non_exhaustive()
    }
}

impl Status {
    /// Initialize a status bound to a group and case.
    ///
    /// If the configuration's group/case selectors name a different
    /// group or case, the disposition is set to `Skipped` and the case
    /// body must not run (a skip counts as a trivial pass). Group and
    /// case numbers are 1-based; passing 0 is harness misuse and yields a
    /// status already marked failed, with a diagnostic on stderr.
    ///
    /// Stamps the start time.
    #[must_use]
    pub fn init(config: &Config, group: u32, case: u32, group_name: &str, case_name: &str) -> Self {
        let reporter = Reporter::from_run_config(config);
        let mut status = Self {
            config: config.clone(),
            reporter,
            group,
            case,
            group_name: group_name.to_string(),
            case_name: case_name.to_string(),
            subtest: 0,
            subtest_name: String::new(),
            result: true,
            errors: 0,
            first_failed_subtest: 0,
            disposition: Disposition::Continue,
            deliberate: false,
            started: Instant::now(),
            duration: Duration::ZERO,
            responder: None,
        };
        if group == 0 || case == 0 {
            status
                .reporter
                .diagnostic("status::init", "group and case numbers must be positive");
            status.errors = 1;
            status.result = false;
            status.disposition = Disposition::Failed;
        } else if !config.selects_case(group, group_name, case, case_name) {
            status.disposition = Disposition::Skipped;
        }
        status
    }

    /// Replace the prompt answer source; for deterministic prompt tests.
    #[must_use]
    pub fn with_responder(mut self, responder: Box<dyn Responder>) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Whether the case body should run at all.
    #[must_use]
    pub const fn active(&self) -> bool {
        matches!(self.disposition, Disposition::Continue)
    }

    /// Declare the next sequential sub-test and ask whether it should
    /// execute.
    ///
    /// The first sub-test always runs regardless of the sub-test selector:
    /// later sub-tests may depend on setup performed in sub-test 1. This
    /// is deliberate policy, not an oversight. Subsequent sub-tests run
    /// only when the selector matches their number or name.
    ///
    /// Interactive runs prompt before the sub-test; skip/abort/quit
    /// answers suppress execution (abort and quit also end the run once
    /// the driver resolves the disposition).
    pub fn next_subtest(&mut self, name: &str) -> bool {
        if self.disposition.is_terminal() || self.disposition == Disposition::Skipped {
            return false;
        }
        self.subtest += 1;
        self.subtest_name = name.to_string();
        if self.config.show_steps {
            self.reporter.step(self.subtest, name);
        }
        match self.prompt_before(name) {
            BeforeAction::Run => {}
            BeforeAction::Skip => return false,
            BeforeAction::Abort => {
                self.disposition = Disposition::Aborted;
                return false;
            }
            BeforeAction::Quit => {
                self.disposition = Disposition::Quitted;
                return false;
            }
        }
        if self.subtest == 1 {
            return true;
        }
        self.config.subtest.selects(self.subtest, name)
    }

    /// Record a check result for the current sub-test.
    ///
    /// A false flag increments the error count, remembers the first
    /// failing sub-test (sticky), and moves the disposition to `Failed`
    /// unless it is already terminal. Interactive runs prompt after the
    /// result; the answer can override it or end the run.
    pub fn check(&mut self, flag: bool) {
        let mut flag = flag;
        match self.prompt_after(flag) {
            AfterAction::Pass => {}
            AfterAction::Fail => flag = false,
            AfterAction::Abort => self.disposition = Disposition::Aborted,
            AfterAction::Quit => self.disposition = Disposition::Quitted,
        }
        if !flag {
            self.record_failure();
        }
    }

    /// Check two integers for equality, printing the values when
    /// configured to.
    pub fn check_int(&mut self, expected: i64, actual: i64) {
        if self.config.show_values {
            self.reporter
                .values(&expected.to_string(), &actual.to_string());
        }
        self.check(expected == actual);
    }

    /// Check two strings for equality, printing the values when
    /// configured to.
    pub fn check_str(&mut self, expected: &str, actual: &str) {
        if self.config.show_values {
            self.reporter.values(expected, actual);
        }
        self.check(expected == actual);
    }

    /// Check two booleans for equality, printing the values when
    /// configured to.
    pub fn check_bool(&mut self, expected: bool, actual: bool) {
        if self.config.show_values {
            self.reporter
                .values(&expected.to_string(), &actual.to_string());
        }
        self.check(expected == actual);
    }

    /// Record a failure for the current sub-test.
    pub fn fail(&mut self) {
        self.check(false);
    }

    /// Record an intentionally injected failure.
    ///
    /// Used by harness self-tests: the failure counts like any other, but
    /// the driver will not apply stop-on-error to it.
    pub fn fail_deliberately(&mut self) {
        self.deliberate = true;
        self.record_failure();
    }

    fn record_failure(&mut self) {
        self.errors += 1;
        if self.first_failed_subtest == 0 {
            self.first_failed_subtest = self.subtest;
        }
        if !self.disposition.is_terminal() {
            self.disposition = Disposition::Failed;
        }
        self.result = false;
    }

    /// Stamp the end time and compute the elapsed duration. With
    /// `reset_start`, the start time is moved to now for lap timing.
    pub fn time_delta(&mut self, reset_start: bool) -> Duration {
        let now = Instant::now();
        self.duration = now.saturating_duration_since(self.started);
        if reset_start {
            self.started = now;
        }
        self.duration
    }

    /// Resolve the disposition into the final case result.
    ///
    /// This is the single place where "did this case pass" is decided;
    /// test functions must not read [`Status::result`] before the driver
    /// has called it. Returns whether the suite run loop must stop.
    pub fn dispose(&mut self) -> bool {
        let resolution = self.disposition.resolve();
        if let Some(forced) = resolution.forced_result {
            self.result = forced;
        }
        resolution.stop
    }

    fn prompt_before(&mut self, name: &str) -> BeforeAction {
        if !self.config.interactive {
            return BeforeAction::Run;
        }
        if let Some(ch) = self.config.response_before {
            return BeforeAction::from_char(ch);
        }
        self.reporter.prompt(
            &format!("run sub-test {} '{}'? [c/s/a/q]", self.subtest, name),
            self.config.beep,
        );
        self.read_char().map_or(BeforeAction::Run, BeforeAction::from_char)
    }

    fn prompt_after(&mut self, flag: bool) -> AfterAction {
        if !self.config.interactive {
            return AfterAction::Pass;
        }
        if let Some(ch) = self.config.response_after {
            return AfterAction::from_char(ch);
        }
        let shown = if flag { "ok" } else { "failed" };
        self.reporter.prompt(
            &format!("sub-test {} {shown}, accept? [p/f/a/q]", self.subtest),
            self.config.beep,
        );
        self.read_char().map_or(AfterAction::Pass, AfterAction::from_char)
    }

    fn read_char(&mut self) -> Option<char> {
        self.responder.as_mut().map_or_else(
            || StdinResponder.read_char(),
            |responder| responder.read_char(),
        )
    }

    // Read-only accessors.

    /// Group number (1-based).
    #[must_use]
    pub const fn group(&self) -> u32 {
        self.group
    }

    /// Case number within the group (1-based).
    #[must_use]
    pub const fn case(&self) -> u32 {
        self.case
    }

    /// Group name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Case name.
    #[must_use]
    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    /// Number of sub-tests declared so far.
    #[must_use]
    pub const fn subtest(&self) -> u32 {
        self.subtest
    }

    /// Name of the most recently declared sub-test.
    #[must_use]
    pub fn subtest_name(&self) -> &str {
        &self.subtest_name
    }

    /// Case result. Final only after [`Status::dispose`].
    #[must_use]
    pub const fn result(&self) -> bool {
        self.result
    }

    /// Number of failed checks.
    #[must_use]
    pub const fn errors(&self) -> u32 {
        self.errors
    }

    /// Sub-test number of the first failed check; 0 when none failed.
    #[must_use]
    pub const fn first_failed_subtest(&self) -> u32 {
        self.first_failed_subtest
    }

    /// Current disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Whether the recorded failure was deliberately injected.
    #[must_use]
    pub const fn is_deliberate(&self) -> bool {
        self.deliberate
    }

    /// Duration computed by the last [`Status::time_delta`] call.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
