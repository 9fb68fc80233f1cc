//! Test disposition state machine.
//!
//! A [`Disposition`] tracks how a running case is allowed to proceed beyond
//! plain pass/fail: it starts at `Continue` and moves to `Skipped` (selector
//! mismatch at init), `Failed` (any recorded check failure), or the terminal
//! `Quitted`/`Aborted` states driven by interactive prompt responses.

use serde::{Deserialize, Serialize};

/// Disposition of a test case while it runs and after it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Initial state; the case is executing normally.
    #[default]
    Continue,
    /// The case was excluded by a group/case selector. Not a failure.
    Skipped,
    /// At least one check failed.
    Failed,
    /// The user asked to quit the run without marking the case failed.
    Quitted,
    /// The user asked to abort the run; the case counts as failed.
    Aborted,
}

/// Outcome of resolving a disposition at the end of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Value the case result must be forced to, if any.
    pub forced_result: Option<bool>,
    /// Whether the suite run loop must stop after this case.
    pub stop: bool,
}

impl Disposition {
    /// Resolve this disposition into a final result adjustment and a
    /// stop request for the driver.
    ///
    /// | disposition | result    | stop  |
    /// |-------------|-----------|-------|
    /// | `Continue`  | unchanged | false |
    /// | `Skipped`   | true      | false |
    /// | `Failed`    | false     | false |
    /// | `Quitted`   | true      | true  |
    /// | `Aborted`   | false     | true  |
    ///
    /// Skipping and quitting are not failures; a skipped case "ran
    /// trivially and passed".
    #[must_use]
    pub const fn resolve(self) -> Resolution {
        match self {
            Self::Continue => Resolution {
                forced_result: None,
                stop: false,
            },
            Self::Skipped => Resolution {
                forced_result: Some(true),
                stop: false,
            },
            Self::Failed => Resolution {
                forced_result: Some(false),
                stop: false,
            },
            Self::Quitted => Resolution {
                forced_result: Some(true),
                stop: true,
            },
            Self::Aborted => Resolution {
                forced_result: Some(false),
                stop: true,
            },
        }
    }

    /// Whether the disposition can no longer change (quit/abort).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Quitted | Self::Aborted)
    }

    /// Short lowercase label for progress lines and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
            Self::Quitted => "quitted",
            Self::Aborted => "aborted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_leaves_result_alone() {
        let r = Disposition::Continue.resolve();
        assert_eq!(r.forced_result, None);
        assert!(!r.stop);
    }

    #[test]
    fn test_skipped_is_a_trivial_pass() {
        let r = Disposition::Skipped.resolve();
        assert_eq!(r.forced_result, Some(true));
        assert!(!r.stop);
    }

    #[test]
    fn test_failed_forces_false_without_stopping() {
        let r = Disposition::Failed.resolve();
        assert_eq!(r.forced_result, Some(false));
        assert!(!r.stop);
    }

    #[test]
    fn test_quitted_passes_but_stops() {
        let r = Disposition::Quitted.resolve();
        assert_eq!(r.forced_result, Some(true));
        assert!(r.stop);
    }

    #[test]
    fn test_aborted_fails_and_stops() {
        let r = Disposition::Aborted.resolve();
        assert_eq!(r.forced_result, Some(false));
        assert!(r.stop);
    }

    #[test]
    fn test_terminal_states() {
        assert!(Disposition::Quitted.is_terminal());
        assert!(Disposition::Aborted.is_terminal());
        assert!(!Disposition::Continue.is_terminal());
        assert!(!Disposition::Skipped.is_terminal());
        assert!(!Disposition::Failed.is_terminal());
    }
}
