use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    /// The isolated child was terminated by `signal`; `name` is its
    /// human-readable description.
    Crashed { signal: i32, name: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    /// Tests the harness could not run at all. Not part of `passed` or
    /// `failed`.
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_success() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn record_error(&mut self) {
        self.errored += 1;
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[derive(Debug)]
pub struct TestRecord {
    pub name: String,
    pub result: Result<Outcome, HarnessError>,
}

impl TestRecord {
    pub fn outcome(&self) -> Option<&Outcome> {
        self.result.as_ref().ok()
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<TestRecord>,
    pub summary: RunSummary,
}

impl RunReport {
    pub(crate) fn push(&mut self, name: &str, result: Result<Outcome, HarnessError>) {
        match &result {
            Ok(outcome) => self.summary.record(outcome),
            Err(_) => self.summary.record_error(),
        }
        self.records.push(TestRecord {
            name: name.to_string(),
            result,
        });
    }

    pub fn has_failures(&self) -> bool {
        self.summary.has_failures()
    }
}
