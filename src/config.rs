//! Runner configuration.
//!
//! Both switches are plain booleans. The environment form follows the usual
//! convention of this harness: a switch is on only when its variable is
//! exactly `1`.

pub const ISOLATE_ENV: &str = "ISOTEST_ISOLATE";
pub const EXIT_ON_FAILURE_ENV: &str = "ISOTEST_EXIT_ON_FAILURE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Run every test in its own forked child process.
    pub isolate: bool,
    /// Exit the process with a failure status after the summary if any test
    /// failed.
    pub exit_on_failure: bool,
}

impl RunnerOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            isolate: is_enabled(lookup(ISOLATE_ENV)),
            exit_on_failure: is_enabled(lookup(EXIT_ON_FAILURE_ENV)),
        }
    }

    /// Switches on anything enabled in `other`.
    pub fn merge(self, other: RunnerOptions) -> Self {
        Self {
            isolate: self.isolate || other.isolate,
            exit_on_failure: self.exit_on_failure || other.exit_on_failure,
        }
    }
}

fn is_enabled(value: Option<String>) -> bool {
    value.as_deref() == Some("1")
}
