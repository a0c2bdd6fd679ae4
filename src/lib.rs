//! A small unit-test harness.
//!
//! Tests are plain functions returning [`TestResult`], registered in order
//! into a [`Registry`] and run by a [`Runner`], optionally each in its own
//! forked process so that a crash is reported as a single failed test.

pub mod assertions;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod runner;

pub use assertions::{AssertionResult, Failure, TestResult};
pub use config::RunnerOptions;
pub use error::HarnessError;
pub use registry::{Registry, TestCase};
pub use runner::{
    run_all, run_with, Outcome, Reporter, RunReport, RunSummary, Runner, TestRecord, TextReporter,
};
