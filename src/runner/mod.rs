pub mod executor;
#[cfg(unix)]
pub mod isolation;
pub mod outcome;
pub mod reporter;

pub use executor::{execute_in_process, run_all, run_with, Runner, EXIT_ON_FAILURE_STATUS};
pub use outcome::{Outcome, RunReport, RunSummary, TestRecord};
pub use reporter::{Reporter, TextReporter};
