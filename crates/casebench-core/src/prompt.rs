//! Interactive prompt/response protocol.
//!
//! Interactive runs pause before each sub-test and after each check result
//! for a single-character answer. When an automated response character is
//! configured (the batch preset does this), the blocking read is skipped
//! entirely, which is what allows fully unattended runs of a nominally
//! interactive suite.

use std::collections::VecDeque;
use std::io::{self, Read};

/// Source of single-character prompt answers.
///
/// Kept behind a trait so harness self-tests can script answers instead of
/// needing real console input.
pub trait Responder {
    /// Block until one character is available. `None` means the input
    /// stream is exhausted; callers fall back to the default action.
    fn read_char(&mut self) -> Option<char>;
}

/// Reads one character (plus the trailing newline) from stdin.
#[derive(Debug, Default)]
pub struct StdinResponder;

impl Responder for StdinResponder {
    fn read_char(&mut self) -> Option<char> {
        let mut buf = [0u8; 1];
        loop {
            match io::stdin().read(&mut buf) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    let ch = char::from(buf[0]);
                    if ch != '\n' && ch != '\r' {
                        return Some(ch);
                    }
                }
            }
        }
    }
}

/// Replays a pre-scripted sequence of answers; for tests.
#[derive(Debug, Default)]
pub struct ScriptedResponder {
    answers: VecDeque<char>,
}

impl ScriptedResponder {
    #[must_use]
    pub fn new(answers: &str) -> Self {
        Self {
            answers: answers.chars().collect(),
        }
    }

    /// How many scripted answers are still unconsumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Responder for ScriptedResponder {
    fn read_char(&mut self) -> Option<char> {
        self.answers.pop_front()
    }
}

/// Answer to the prompt shown before a sub-test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeforeAction {
    /// Run the sub-test (default).
    Run,
    /// Skip this sub-test, keep going.
    Skip,
    /// Abort the whole run, marking the case failed.
    Abort,
    /// Quit the run without marking the case failed.
    Quit,
}

impl BeforeAction {
    /// Interpret a response character; unrecognized input runs the
    /// sub-test.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            's' => Self::Skip,
            'a' => Self::Abort,
            'q' => Self::Quit,
            _ => Self::Run,
        }
    }
}

/// Answer to the prompt shown after a check result is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterAction {
    /// Accept the recorded result (default).
    Pass,
    /// Record an additional failure for this sub-test.
    Fail,
    /// Abort the whole run, marking the case failed.
    Abort,
    /// Quit the run without marking the case failed.
    Quit,
}

impl AfterAction {
    /// Interpret a response character; unrecognized input accepts the
    /// result.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'f' => Self::Fail,
            'a' => Self::Abort,
            'q' => Self::Quit,
            _ => Self::Pass,
        }
    }
}
