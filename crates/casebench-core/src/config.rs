//! Run configuration consumed by the execution engine.
//!
//! The core never parses argv; the CLI crate (or the embedding application)
//! builds a [`Config`] and hands it in read-only. The driver only ever
//! mutates `current_test` as it advances through the registered list.

use serde::{Deserialize, Serialize};

/// Selects a group, case, or sub-test by number and/or name.
///
/// Number 0 with no name means "no restriction". When both a number and a
/// name are present, matching either one selects the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub number: u32,
    pub name: Option<String>,
}

impl Selector {
    /// Selector that matches everything.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            number: 0,
            name: None,
        }
    }

    /// Select by number only.
    #[must_use]
    pub const fn number(number: u32) -> Self {
        Self { number, name: None }
    }

    /// Select by name only.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            number: 0,
            name: Some(name.into()),
        }
    }

    /// Whether this selector places no restriction at all.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.number == 0 && self.name.is_none()
    }

    /// Whether the item with the given number and name is selected.
    #[must_use]
    pub fn selects(&self, number: u32, name: &str) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        if self.number != 0 && self.number == number {
            return true;
        }
        self.name.as_deref() == Some(name)
    }
}

/// Immutable run configuration, built once at suite startup.
///
/// `current_test` is the one exception: the driver updates it as it
/// advances so nested reporting can reference the running test's ordinal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Verbose progress output.
    pub verbose: bool,
    /// Print expected/actual values on equality checks.
    pub show_values: bool,
    /// Print sub-test step numbers as they are declared.
    pub show_steps: bool,
    /// Print the banner, per-case lines, and the final summary.
    pub show_progress: bool,
    /// Stop the run after the first failed case.
    pub stop_on_error: bool,
    /// Batch preset active (see [`Config::batch`]).
    pub batch: bool,
    /// Prompt before each sub-test and after each check result.
    pub interactive: bool,
    /// Emit an audible alert before a blocking prompt.
    pub beep: bool,
    /// List registered cases without executing them.
    pub summarize_only: bool,
    /// Treat a case that declares zero sub-tests as harness misuse.
    pub require_subtests: bool,
    /// Let self-check suites inject a deliberate failure.
    pub force_failure: bool,
    /// Wait for a key between cases (interactive runs only).
    pub case_pause: bool,
    /// Milliseconds to sleep after each passing case.
    pub sleep_ms: u64,
    /// Restrict the run to one group.
    pub group: Selector,
    /// Restrict the run to one case.
    pub case: Selector,
    /// Restrict each case to one sub-test (the first always runs).
    pub subtest: Selector,
    /// Ordinal of the test currently being driven, 1-based. 0 before the
    /// run starts.
    pub current_test: u32,
    /// Automated answer for the before-sub-test prompt.
    pub response_before: Option<char>,
    /// Automated answer for the after-check prompt.
    pub response_after: Option<char>,
    /// Marks a simulated (self-test) run in reports.
    pub simulated: bool,
    /// Suppress all stdout progress output.
    pub quiet: bool,
    /// Suppress all stderr diagnostics.
    pub silent: bool,
    /// ANSI colors in output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            show_values: false,
            show_steps: false,
            show_progress: true,
            stop_on_error: false,
            batch: false,
            interactive: false,
            beep: false,
            summarize_only: false,
            require_subtests: false,
            force_failure: false,
            case_pause: false,
            sleep_ms: 0,
            group: Selector::all(),
            case: Selector::all(),
            subtest: Selector::all(),
            current_test: 0,
            response_before: None,
            response_after: None,
            simulated: false,
            quiet: false,
            silent: false,
            color: true,
        }
    }
}

impl Config {
    /// The batch preset: a fully unattended run of a nominally interactive
    /// suite.
    ///
    /// Batch historically implied more than one flag: prompts are enabled
    /// but auto-answered ('c' before a sub-test, 'p' after a check), and
    /// value printing and verbosity are switched off. The coupling is kept
    /// here as one named profile instead of hidden flag mutation, so a
    /// caller depending on an individual flag can set it explicitly after
    /// applying the preset.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            batch: true,
            interactive: true,
            response_before: Some('c'),
            response_after: Some('p'),
            show_values: false,
            verbose: false,
            ..Self::default()
        }
    }

    /// Whether the group/case selectors allow the given case to run.
    #[must_use]
    pub fn selects_case(&self, group: u32, group_name: &str, case: u32, case_name: &str) -> bool {
        self.group.selects(group, group_name) && self.case.selects(case, case_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_selector_matches_everything() {
        let s = Selector::all();
        assert!(s.selects(1, "alpha"));
        assert!(s.selects(99, ""));
    }

    #[test]
    fn test_selector_by_number() {
        let s = Selector::number(3);
        assert!(s.selects(3, "anything"));
        assert!(!s.selects(4, "anything"));
    }

    #[test]
    fn test_selector_by_name() {
        let s = Selector::name("math");
        assert!(s.selects(7, "math"));
        assert!(!s.selects(7, "strings"));
    }

    #[test]
    fn test_selector_number_or_name_matches_either() {
        let s = Selector {
            number: 2,
            name: Some("math".to_string()),
        };
        assert!(s.selects(2, "strings"));
        assert!(s.selects(5, "math"));
        assert!(!s.selects(5, "strings"));
    }

    #[test]
    fn test_batch_preset_coupling() {
        let config = Config::batch();
        assert!(config.batch);
        assert!(config.interactive);
        assert_eq!(config.response_before, Some('c'));
        assert_eq!(config.response_after, Some('p'));
        assert!(!config.show_values);
        assert!(!config.verbose);
    }

    #[test]
    fn test_selects_case_needs_both_selectors() {
        let config = Config {
            group: Selector::number(1),
            case: Selector::number(2),
            ..Config::default()
        };
        assert!(config.selects_case(1, "g", 2, "c"));
        assert!(!config.selects_case(1, "g", 3, "c"));
        assert!(!config.selects_case(2, "g", 2, "c"));
    }
}
