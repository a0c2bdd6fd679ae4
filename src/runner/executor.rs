use crate::config::RunnerOptions;
use crate::error::HarnessError;
use crate::registry::{Registry, TestCase};
use crate::runner::outcome::{Outcome, RunReport};
use crate::runner::reporter::{Reporter, TextReporter};
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

/// Status the harness exits with when `exit_on_failure` applies.
pub const EXIT_ON_FAILURE_STATUS: i32 = 255;

type IsolatedFn = fn(&TestCase) -> Result<Outcome, HarnessError>;

pub struct Runner<R: Reporter> {
    options: RunnerOptions,
    reporter: R,
    run_isolated: IsolatedFn,
}

impl<R: Reporter> Runner<R> {
    pub fn new(options: RunnerOptions, reporter: R) -> Self {
        Self {
            options,
            reporter,
            run_isolated,
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs every registered test once, in registration order, and reports
    /// the summary. Never stops early: failures, crashes and harness errors
    /// are all contained to the test that caused them.
    pub fn run(&mut self, registry: &Registry) -> RunReport {
        let mut report = RunReport::default();

        tracing::debug!(
            tests = registry.len(),
            isolate = self.options.isolate,
            "Starting test run"
        );

        for test in registry {
            self.reporter.on_test_start(test.name());

            let result = self.execute(test);
            match &result {
                Ok(outcome) => self.reporter.on_outcome(test.name(), outcome),
                Err(e) => {
                    tracing::error!(test = test.name(), "Could not run test: {}", e);
                    self.reporter.on_harness_error(test.name(), e);
                }
            }

            report.push(test.name(), result);
        }

        self.reporter.on_summary(&report.summary);
        self.reporter.flush();

        tracing::info!(
            passed = report.summary.passed,
            failed = report.summary.failed,
            errored = report.summary.errored,
            "Test run complete"
        );

        report
    }

    /// Ends the run: exits the process with [`EXIT_ON_FAILURE_STATUS`] when
    /// `exit_on_failure` is set and anything failed, returns otherwise.
    pub fn finish(&mut self, report: &RunReport) {
        if self.options.exit_on_failure && report.has_failures() {
            self.reporter.on_exit();
            self.reporter.flush();
            let _ = io::stdout().flush();
            std::process::exit(EXIT_ON_FAILURE_STATUS);
        }
    }

    fn execute(&mut self, test: &TestCase) -> Result<Outcome, HarnessError> {
        if !self.options.isolate {
            return Ok(execute_in_process(test));
        }

        self.reporter.flush();
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        (self.run_isolated)(test)
    }
}

#[cfg(unix)]
fn run_isolated(test: &TestCase) -> Result<Outcome, HarnessError> {
    crate::runner::isolation::run_isolated(test)
}

#[cfg(not(unix))]
fn run_isolated(_test: &TestCase) -> Result<Outcome, HarnessError> {
    Err(HarnessError::Unsupported)
}

/// Runs a test body on the current thread. A failed check yields `Failed`;
/// so does a panic escaping the body, which is caught here rather than
/// unwinding through the runner.
pub fn execute_in_process(test: &TestCase) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| test.run())) {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(_)) => Outcome::Failed,
        Err(_) => {
            tracing::debug!(test = test.name(), "Test body panicked");
            Outcome::Failed
        }
    }
}

/// One-call entry point: options from the environment, logging, stdout
/// reporting, and the exit-on-failure handling.
pub fn run_all(registry: &Registry) -> RunReport {
    run_with(registry, RunnerOptions::from_env())
}

/// [`run_all`] with options supplied by the caller.
pub fn run_with(registry: &Registry, options: RunnerOptions) -> RunReport {
    crate::logging::init();

    let mut runner = Runner::new(options, TextReporter::stdout());
    let report = runner.run(registry);
    runner.finish(&report);
    report
}
