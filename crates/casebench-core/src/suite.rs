//! Suite driver: test registration and the run loop.
//!
//! The suite owns the ordered list of registered test functions, invokes
//! them one at a time, folds each returned [`Status`] into the run
//! aggregates, and decides when to stop. Execution is single-threaded and
//! synchronous; the only blocking points are the interactive prompts and
//! the configured inter-test sleep.

use crate::config::Config;
use crate::disposition::Disposition;
use crate::prompt::{Responder, StdinResponder};
use crate::report::{CaseReport, RunReport, RunSummary};
use crate::reporter::Reporter;
use crate::status::Status;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// A registered test function: receives the run configuration, returns a
/// populated status record.
pub type TestFn = Box<dyn Fn(&Config) -> Status>;

/// Errors that end a run without a pass/fail verdict.
///
/// These are deliberately distinct from ordinary test failures: a missing
/// sub-test declaration under the require-subtests policy is harness
/// misuse, not a failing test, and reports must not conflate the two.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SuiteError {
    #[error("no tests registered")]
    NoTestsRegistered,
    #[error(
        "test {test} (group {group}, case {case}) declared no sub-tests \
         but the require-subtests policy is active"
    )]
    SubtestsRequired { test: u32, group: u32, case: u32 },
}

/// An ordered collection of test functions plus the run-time aggregates.
pub struct Suite {
    config: Config,
    reporter: Reporter,
    tests: Vec<TestFn>,
    responder: Option<Box<dyn Responder>>,
    summary: RunSummary,
    cases: Vec<CaseReport>,
}

impl Suite {
    /// Create a suite bound to a configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let reporter = Reporter::from_run_config(&config);
        Self {
            config,
            reporter,
            tests: Vec::new(),
            responder: None,
            summary: RunSummary::default(),
            cases: Vec::new(),
        }
    }

    /// Replace the answer source for the between-case pause; for tests.
    #[must_use]
    pub fn with_responder(mut self, responder: Box<dyn Responder>) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Append a test function. Registration order is execution order.
    pub fn load<F>(&mut self, test: F)
    where
        F: Fn(&Config) -> Status + 'static,
    {
        self.tests.push(Box::new(test));
    }

    /// Number of registered test functions.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Aggregates of the most recent run.
    #[must_use]
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Execute every registered test in order and return the overall
    /// verdict.
    ///
    /// The verdict is recomputed from the aggregate (`total_errors == 0`),
    /// never taken from the last case: an early exit triggered by a
    /// passing "quit" must not report success when earlier cases failed.
    ///
    /// # Errors
    /// [`SuiteError::NoTestsRegistered`] when nothing was loaded;
    /// [`SuiteError::SubtestsRequired`] when a case declares zero
    /// sub-tests under the require-subtests policy. Both abort the run
    /// independently of any test failures.
    pub fn run(&mut self) -> Result<bool, SuiteError> {
        if self.tests.is_empty() {
            self.reporter.error("no tests registered");
            return Err(SuiteError::NoTestsRegistered);
        }

        self.summary = RunSummary {
            total_tests: u32::try_from(self.tests.len()).unwrap_or(u32::MAX),
            simulated: self.config.simulated,
            summarized: self.config.summarize_only,
            ..RunSummary::default()
        };
        self.cases.clear();
        self.config.current_test = 0;
        self.reporter.banner(self.tests.len());
        let run_started = Instant::now();

        if self.config.summarize_only {
            self.reporter.summarized(self.tests.len());
            self.summary.verdict = true;
            self.summary.duration_ms = duration_ms(run_started.elapsed());
            return Ok(true);
        }

        let mut stop = false;
        let mut index = 0;
        while !stop && index < self.tests.len() {
            let ordinal = u32::try_from(index + 1).unwrap_or(u32::MAX);
            self.config.current_test = ordinal;
            let mut status = (self.tests[index])(&self.config);
            self.summary.executed += 1;

            if let Err(err) = self.check_subtests(&status) {
                self.reporter.error(&err.to_string());
                self.post_loop(run_started);
                return Err(err);
            }

            stop = self.dispose_of_test(&mut status, ordinal);
            index += 1;
        }

        self.post_loop(run_started);
        Ok(self.summary.verdict)
    }

    /// Print the final overall verdict line.
    pub fn report(&self, passed: bool) {
        self.reporter.verdict(passed);
    }

    /// Build the serializable report of the most recent run.
    #[must_use]
    pub fn report_data(&self, timestamp: &str) -> RunReport {
        RunReport {
            timestamp: timestamp.to_string(),
            cases: self.cases.clone(),
            summary: self.summary.clone(),
        }
    }

    /// Fold a case's sub-test count into the running total.
    ///
    /// Zero declared sub-tests is benign by default (the case simply did
    /// not use them) but is harness misuse under the require-subtests
    /// policy.
    fn check_subtests(&mut self, status: &Status) -> Result<(), SuiteError> {
        let declared = status.subtest();
        if declared > 0 {
            self.summary.subtests += u64::from(declared);
            return Ok(());
        }
        if self.config.require_subtests && status.disposition() != Disposition::Skipped {
            return Err(SuiteError::SubtestsRequired {
                test: self.config.current_test,
                group: status.group(),
                case: status.case(),
            });
        }
        Ok(())
    }

    /// Resolve a returned status into the aggregates; returns whether the
    /// run loop must stop.
    fn dispose_of_test(&mut self, status: &mut Status, ordinal: u32) -> bool {
        let mut stop = status.dispose();
        let duration = status.time_delta(false);
        let passed = status.result();

        if passed {
            if status.disposition() == Disposition::Skipped {
                self.summary.skipped += 1;
            } else {
                self.summary.passed += 1;
            }
        } else {
            self.summary.failed += 1;
            self.summary.total_errors += u64::from(status.errors().max(1));
            // "first" is sticky across the whole run.
            if self.summary.first_failed_test == 0 {
                self.summary.first_failed_test = ordinal;
                self.summary.first_failed_group = status.group();
                self.summary.first_failed_case = status.case();
                self.summary.first_failed_subtest = status.first_failed_subtest();
            }
            if self.config.stop_on_error && !status.is_deliberate() {
                stop = true;
            }
        }

        self.reporter.case_line(
            status.group(),
            status.case(),
            status.case_name(),
            status.disposition().label(),
        );

        self.cases.push(CaseReport {
            test: ordinal,
            group: status.group(),
            case: status.case(),
            group_name: status.group_name().to_string(),
            case_name: status.case_name().to_string(),
            subtests: status.subtest(),
            errors: status.errors(),
            first_failed_subtest: status.first_failed_subtest(),
            disposition: status.disposition(),
            passed,
            duration_ms: duration_ms(duration),
        });

        // Throttle between cases, e.g. to let OS resources settle.
        if passed && self.config.sleep_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.sleep_ms));
        }

        if !stop && self.config.case_pause && self.config.interactive {
            self.pause_between_cases();
        }

        stop
    }

    fn pause_between_cases(&mut self) {
        self.reporter
            .prompt("press a key for the next case:", self.config.beep);
        let _ = match &mut self.responder {
            Some(responder) => responder.read_char(),
            None => StdinResponder.read_char(),
        };
    }

    fn post_loop(&mut self, run_started: Instant) {
        self.summary.duration_ms = duration_ms(run_started.elapsed());
        self.summary.verdict = self.summary.total_errors == 0;
        let first_failure = (self.summary.first_failed_test != 0).then(|| {
            (
                self.summary.first_failed_test,
                self.summary.first_failed_group,
                self.summary.first_failed_case,
                self.summary.first_failed_subtest,
            )
        });
        self.reporter.summary(
            self.summary.passed,
            self.summary.failed,
            self.summary.skipped,
            self.summary.subtests,
            first_failure,
            run_started.elapsed(),
        );
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
