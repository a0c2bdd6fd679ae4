use crate::error::HarnessError;
use crate::runner::outcome::{Outcome, RunSummary};
use owo_colors::OwoColorize;
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

pub trait Reporter {
    fn on_test_start(&mut self, name: &str);
    fn on_outcome(&mut self, name: &str, outcome: &Outcome);
    fn on_harness_error(&mut self, name: &str, error: &HarnessError);
    fn on_summary(&mut self, summary: &RunSummary);
    fn on_exit(&mut self);
    /// Called before forking so buffered output is not written twice.
    fn flush(&mut self);
}

/// Line-oriented, colored text output. Regular lines go to `out`, harness
/// errors to `err`.
pub struct TextReporter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl TextReporter<Stdout, Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TextReporter<W, E> {
    /// Only the runner's own lines go to `out`. Assertion failure blocks are
    /// written by the failing check itself, straight to the process's stdout,
    /// because in isolated mode they come from the child process.
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            tracing::warn!("Failed to write report line: {}", e);
        }
    }
}

impl<W: Write, E: Write> Reporter for TextReporter<W, E> {
    fn on_test_start(&mut self, name: &str) {
        self.line(format_args!("Running test: {}", name.bold().cyan()));
    }

    fn on_outcome(&mut self, name: &str, outcome: &Outcome) {
        let bold = name.bold();
        let name = bold.cyan();
        match outcome {
            Outcome::Passed => self.line(format_args!("Test {} {}.", name, "passed".bold().green())),
            Outcome::Failed => self.line(format_args!("Test {} {}.", name, "failed".bold().red())),
            Outcome::Crashed { name: signal, .. } => self.line(format_args!(
                "Test {} {}. Signal: {}",
                name,
                "failed".bold().red(),
                signal
            )),
        }
    }

    fn on_harness_error(&mut self, name: &str, error: &HarnessError) {
        if let Err(e) = writeln!(self.err, "Error starting test {}: {}", name, error) {
            tracing::warn!("Failed to write harness error: {}", e);
        }
    }

    fn on_summary(&mut self, summary: &RunSummary) {
        self.line(format_args!("{}", "## TEST RESULTS ##".bold()));
        self.line(format_args!("  Tests passed: {}", summary.passed));
        self.line(format_args!("  Tests failed: {}", summary.failed));
        if summary.errored > 0 {
            self.line(format_args!("  Tests not run: {}", summary.errored));
        }
        if summary.has_failures() {
            self.line(format_args!("{}", "## TESTS FAILED ##".bold().red()));
        }
    }

    fn on_exit(&mut self) {
        self.line(format_args!("Exiting..."));
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}
