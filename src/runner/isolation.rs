//! Fork-per-test execution.
//!
//! The child runs exactly one test body and `_exit`s; it never returns into
//! the run loop. The parent blocks until the child is gone and classifies its
//! wait status, so at most one child exists at any time.

use crate::error::HarnessError;
use crate::registry::TestCase;
use crate::runner::executor::execute_in_process;
use crate::runner::outcome::Outcome;
use libc::{c_int, pid_t};
use std::ffi::CStr;
use std::io::{self, Write};

/// Exit status a child uses to report a failed test. Any nonzero status is
/// classified as a failure; this one is used consistently.
pub const FAILURE_EXIT_STATUS: c_int = 255;

pub fn run_isolated(test: &TestCase) -> Result<Outcome, HarnessError> {
    // Safety: the child only runs the test body, flushes and calls `_exit`.
    let pid = unsafe { libc::fork() };
    match pid {
        -1 => Err(HarnessError::Spawn(io::Error::last_os_error())),
        0 => run_child(test),
        child => {
            tracing::debug!(test = test.name(), pid = child, "Forked test process");
            let status = wait_for(child)?;
            let outcome = classify_status(status);
            tracing::debug!(test = test.name(), pid = child, status, ?outcome, "Test process finished");
            Ok(outcome)
        }
    }
}

fn run_child(test: &TestCase) -> ! {
    let status = match execute_in_process(test) {
        Outcome::Passed => 0,
        _ => FAILURE_EXIT_STATUS,
    };

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    // Safety: `_exit` skips the parent's atexit handlers and destructors,
    // which must run only once, in the parent.
    unsafe { libc::_exit(status) }
}

fn wait_for(pid: pid_t) -> Result<c_int, HarnessError> {
    let mut status: c_int = 0;
    loop {
        // Safety: `status` is a valid, writable c_int for the duration of the
        // call.
        let rc = unsafe { libc::waitpid(pid, &mut status, 0) };
        if rc == pid {
            return Ok(status);
        }

        let error = io::Error::last_os_error();
        if error.kind() == io::ErrorKind::Interrupted {
            continue;
        }
        return Err(HarnessError::Wait { pid, source: error });
    }
}

/// exit 0 → passed, any other exit → failed, killed by a signal → crashed.
pub fn classify_status(status: c_int) -> Outcome {
    if libc::WIFEXITED(status) {
        if libc::WEXITSTATUS(status) == 0 {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    } else if libc::WIFSIGNALED(status) {
        let signal = libc::WTERMSIG(status);
        Outcome::Crashed {
            signal,
            name: signal_name(signal),
        }
    } else {
        Outcome::Failed
    }
}

pub fn signal_name(signal: c_int) -> String {
    // Safety: strsignal returns either null or a pointer to a NUL-terminated
    // string that stays valid until the next strsignal call; it is copied
    // out immediately.
    let description = unsafe { libc::strsignal(signal) };
    if description.is_null() {
        return format!("signal {}", signal);
    }
    unsafe { CStr::from_ptr(description) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // Linux wait status layout: exit code in bits 8..16, terminating signal in
    // the low 7 bits.
    fn exited(code: c_int) -> c_int {
        (code & 0xff) << 8
    }

    fn signaled(signal: c_int) -> c_int {
        signal & 0x7f
    }

    #[test]
    fn test_exit_zero_is_pass() {
        assert_eq!(classify_status(exited(0)), Outcome::Passed);
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        assert_eq!(classify_status(exited(FAILURE_EXIT_STATUS)), Outcome::Failed);
        assert_eq!(classify_status(exited(1)), Outcome::Failed);
    }

    #[test]
    fn test_signal_is_crash() {
        assert_matches!(
            classify_status(signaled(libc::SIGSEGV)),
            Outcome::Crashed { signal, ref name } if signal == libc::SIGSEGV && !name.is_empty()
        );
        assert_matches!(
            classify_status(signaled(libc::SIGABRT)),
            Outcome::Crashed { signal, .. } if signal == libc::SIGABRT
        );
    }

    #[test]
    fn test_signal_name_is_readable() {
        assert_eq!(signal_name(libc::SIGSEGV), "Segmentation fault");
        assert_eq!(signal_name(libc::SIGABRT), "Aborted");
    }
}
