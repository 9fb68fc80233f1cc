//! Run output reporter with cargo test-like formatting.
//!
//! Progress and summaries go to stdout, diagnostics to stderr; each stream
//! is independently suppressible. The reporter is an explicit value passed
//! to everything that prints, so there is no process-global silence flag.

use crate::config::Config;
use std::io::{self, Write};
use std::time::Duration;

/// Reporter configuration.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReporterConfig {
    /// Show verbose output (per-sub-test detail).
    pub verbose: bool,
    /// Use colors in output.
    pub color: bool,
    /// Suppress all stdout progress output.
    pub quiet: bool,
    /// Suppress all stderr diagnostics.
    pub silent: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            quiet: false,
            silent: false,
        }
    }
}

/// Suite output reporter.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    /// Create a new reporter with the given configuration.
    #[must_use]
    pub const fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// Derive a reporter from the run configuration's output switches.
    #[must_use]
    pub fn from_run_config(config: &Config) -> Self {
        Self::new(ReporterConfig {
            verbose: config.verbose,
            color: config.color,
            quiet: config.quiet || !config.show_progress,
            silent: config.silent,
        })
    }

    fn ok_marker(&self) -> &'static str {
        if self.config.color {
            "\x1b[32mok\x1b[0m"
        } else {
            "ok"
        }
    }

    fn failed_marker(&self) -> &'static str {
        if self.config.color {
            "\x1b[31mFAILED\x1b[0m"
        } else {
            "FAILED"
        }
    }

    /// Print the start-of-run banner.
    pub fn banner(&self, test_count: usize) {
        if self.config.quiet {
            return;
        }
        println!();
        println!("running {test_count} tests");
    }

    /// Print a per-case result line.
    pub fn case_line(&self, group: u32, case: u32, name: &str, disposition_label: &str) {
        if self.config.quiet {
            return;
        }
        let status = match disposition_label {
            "failed" | "aborted" => self.failed_marker(),
            "skipped" => {
                if self.config.color {
                    "\x1b[33mskipped\x1b[0m"
                } else {
                    "skipped"
                }
            }
            _ => self.ok_marker(),
        };
        println!("test {group}.{case} {name} ... {status}");
    }

    /// Print a sub-test step line (only when step display is on).
    pub fn step(&self, number: u32, name: &str) {
        if self.config.quiet {
            return;
        }
        println!("  step {number}: {name}");
    }

    /// Print an expected/actual value pair for an equality check.
    pub fn values(&self, expected: &str, actual: &str) {
        if self.config.quiet {
            return;
        }
        println!("    expected: {expected}");
        println!("    actual:   {actual}");
    }

    /// Print a blocking prompt message, without a trailing newline.
    pub fn prompt(&self, message: &str, beep: bool) {
        if self.config.quiet {
            return;
        }
        if beep {
            print!("\x07");
        }
        print!("{message} ");
        self.flush();
    }

    /// Print the summarize-only notice.
    pub fn summarized(&self, test_count: usize) {
        if self.config.quiet {
            return;
        }
        println!();
        println!("{test_count} tests summarized, not executed");
    }

    /// Print the final run summary.
    #[allow(clippy::too_many_arguments)]
    pub fn summary(
        &self,
        passed: u32,
        failed: u32,
        skipped: u32,
        subtests: u64,
        first_failure: Option<(u32, u32, u32, u32)>,
        duration: Duration,
    ) {
        if self.config.quiet {
            return;
        }
        let status = if failed == 0 {
            self.ok_marker()
        } else {
            self.failed_marker()
        };
        println!();
        println!(
            "test result: {}. {} passed; {} failed; {} skipped; {} sub-tests; finished in {:.2}s",
            status,
            passed,
            failed,
            skipped,
            subtests,
            duration.as_secs_f64()
        );
        if let Some((test, group, case, subtest)) = first_failure {
            println!(
                "first failure: test {test} (group {group}, case {case}, sub-test {subtest})"
            );
        }
    }

    /// Print the overall verdict line.
    pub fn verdict(&self, passed: bool) {
        if self.config.quiet {
            return;
        }
        let status = if passed {
            self.ok_marker()
        } else {
            self.failed_marker()
        };
        println!("overall: {status}");
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if self.config.silent {
            return;
        }
        if self.config.color {
            eprintln!("\x1b[33mwarning\x1b[0m: {message}");
        } else {
            eprintln!("warning: {message}");
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        if self.config.silent {
            return;
        }
        if self.config.color {
            eprintln!("\x1b[31merror\x1b[0m: {message}");
        } else {
            eprintln!("error: {message}");
        }
    }

    /// Print a diagnostic tagged with the reporting operation's name.
    pub fn diagnostic(&self, operation: &str, message: &str) {
        if self.config.silent {
            return;
        }
        eprintln!("{operation}: {message}");
    }

    /// Whether verbose output is enabled.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.config.verbose
    }

    /// Flush stdout.
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_run_config_quiet_when_progress_off() {
        let config = Config {
            show_progress: false,
            ..Config::default()
        };
        let reporter = Reporter::from_run_config(&config);
        assert!(reporter.config.quiet);
    }

    #[test]
    fn test_from_run_config_carries_switches() {
        let config = Config {
            verbose: true,
            color: false,
            silent: true,
            ..Config::default()
        };
        let reporter = Reporter::from_run_config(&config);
        assert!(reporter.verbose());
        assert!(!reporter.config.color);
        assert!(reporter.config.silent);
        assert!(!reporter.config.quiet);
    }
}
