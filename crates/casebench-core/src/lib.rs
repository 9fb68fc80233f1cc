//! casebench-core: execution engine for the casebench test harness.
//!
//! Application code registers test functions with a [`Suite`], each of
//! which receives the run [`Config`] and returns a populated [`Status`].
//! The driver iterates the registered list, resolves each status through
//! the [`Disposition`] state machine, aggregates errors and first-failure
//! coordinates, and produces the overall verdict plus a report.
//!
//! ```no_run
//! use casebench_core::{Config, Status, Suite};
//!
//! fn addition(config: &Config) -> Status {
//!     let mut status = Status::init(config, 1, 1, "math", "addition");
//!     if !status.active() {
//!         return status;
//!     }
//!     if status.next_subtest("small numbers") {
//!         status.check_int(4, 2 + 2);
//!     }
//!     status
//! }
//!
//! let mut suite = Suite::new(Config::default());
//! suite.load(addition);
//! let passed = suite.run().unwrap_or(false);
//! suite.report(passed);
//! std::process::exit(i32::from(!passed));
//! ```

mod config;
mod disposition;
mod prompt;
mod report;
mod reporter;
mod status;
mod suite;

pub use config::{Config, Selector};
pub use disposition::{Disposition, Resolution};
pub use prompt::{AfterAction, BeforeAction, Responder, ScriptedResponder, StdinResponder};
pub use report::{CaseReport, RunReport, RunSummary};
pub use reporter::{Reporter, ReporterConfig};
pub use status::Status;
pub use suite::{Suite, SuiteError, TestFn};
