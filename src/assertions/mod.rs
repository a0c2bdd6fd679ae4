mod macros;
pub mod raises;

use std::fmt::Debug;
use std::io::{self, Write};

/// What a test body returns. `Err` only ever comes out of a failed check.
pub type TestResult = Result<(), Failure>;

/// Marker returned by a failed assertion.
///
/// The diagnostic has already been written by the time a `Failure` exists, so
/// it carries nothing. Only the assertion path can construct one, and it must
/// not implement [`std::error::Error`] so that it never converts into a user
/// error type.
#[derive(Debug, PartialEq, Eq)]
pub struct Failure {
    _private: (),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    pub message: String,
    pub success: bool,
}

impl AssertionResult {
    pub fn passed() -> Self {
        Self {
            message: String::new(),
            success: true,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Builds a result from an already evaluated condition. `message` is only
    /// called when `success` is false.
    pub fn evaluate(success: bool, message: impl FnOnce() -> String) -> Self {
        if success {
            Self::passed()
        } else {
            Self::failed(message())
        }
    }

    pub fn or_fail(self, file: &str, line: u32) -> TestResult {
        self.or_fail_with(file, line, String::new)
    }

    /// Reports the failure (location, message and optional detail) to stdout
    /// and turns it into `Err(Failure)`. Nothing is formatted on success.
    pub fn or_fail_with(
        self,
        file: &str,
        line: u32,
        detail: impl FnOnce() -> String,
    ) -> TestResult {
        if self.success {
            return Ok(());
        }

        let report = failure_report(file, line, &self.message, &detail());
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(report.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::warn!("Failed to write assertion failure for {}:{}: {}", file, line, e);
        }

        Err(Failure { _private: () })
    }
}

pub fn failure_report(file: &str, line: u32, message: &str, detail: &str) -> String {
    let mut report = format!("{}:{}: Assertion Failure\n{}\n", file, line, message);
    if !detail.is_empty() {
        report.push_str(&format!("    {}\n", detail));
    }
    report
}

#[doc(hidden)]
pub fn describe_truth(kind: &str, expression: &str, value: bool, expected: bool) -> String {
    format!(
        "{} - expected the following to be {}:\n  '{}': {}",
        kind, expected, expression, value
    )
}

#[doc(hidden)]
pub fn describe_comparison<L, R>(
    kind: &str,
    relation: &str,
    left_expression: &str,
    left: &L,
    right_expression: &str,
    right: &R,
) -> String
where
    L: Debug + ?Sized,
    R: Debug + ?Sized,
{
    format!(
        "{} - expected the following to be {}:\n  '{}': {:?}\n  '{}': {:?}",
        kind, relation, left_expression, left, right_expression, right
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_evaluate_success_skips_message() {
        let calls = Cell::new(0);
        let result = AssertionResult::evaluate(true, || {
            calls.set(calls.get() + 1);
            "unused".to_string()
        });
        assert!(result.success);
        assert!(result.message.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_evaluate_failure_formats_once() {
        let calls = Cell::new(0);
        let result = AssertionResult::evaluate(false, || {
            calls.set(calls.get() + 1);
            "boom".to_string()
        });
        assert!(!result.success);
        assert_eq!(result.message, "boom");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_fail_passes_through_success() {
        let detail_calls = Cell::new(0);
        let outcome = AssertionResult::passed().or_fail_with("a.rs", 1, || {
            detail_calls.set(detail_calls.get() + 1);
            String::new()
        });
        assert_eq!(outcome, Ok(()));
        assert_eq!(detail_calls.get(), 0);
    }

    #[test]
    fn test_or_fail_returns_failure() {
        let outcome = AssertionResult::failed("nope".to_string()).or_fail("a.rs", 7);
        assert!(outcome.is_err());
    }

    #[test]
    fn test_failure_report_without_detail() {
        let report = failure_report("src/lib.rs", 12, "CHECK - broken", "");
        assert_eq!(report, "src/lib.rs:12: Assertion Failure\nCHECK - broken\n");
    }

    #[test]
    fn test_failure_report_with_detail() {
        let report = failure_report("src/lib.rs", 12, "CHECK - broken", "extra context");
        assert_eq!(
            report,
            "src/lib.rs:12: Assertion Failure\nCHECK - broken\n    extra context\n"
        );
    }

    #[test]
    fn test_describe_truth() {
        let message = describe_truth("CHECK", "vec.is_empty()", false, true);
        assert_eq!(
            message,
            "CHECK - expected the following to be true:\n  'vec.is_empty()': false"
        );
    }

    #[test]
    fn test_describe_comparison_uses_debug() {
        let message = describe_comparison("CHECK_EQ", "equal", "name", "left", "other", &3);
        assert_eq!(
            message,
            "CHECK_EQ - expected the following to be equal:\n  'name': \"left\"\n  'other': 3"
        );
    }
}
