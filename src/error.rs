use std::io;
use thiserror::Error;

/// Problems with the harness itself rather than with the test under run.
///
/// A test that hits one of these has no outcome and is counted in neither the
/// passed nor the failed total.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to fork test process: {0}")]
    Spawn(#[source] io::Error),

    #[error("failed to wait for test process {pid}: {source}")]
    Wait {
        pid: i32,
        #[source]
        source: io::Error,
    },

    #[error("process isolation is not supported on this platform")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_includes_os_message() {
        let error = HarnessError::Spawn(io::Error::new(io::ErrorKind::Other, "no more processes"));
        assert_eq!(
            error.to_string(),
            "failed to fork test process: no more processes"
        );
    }

    #[test]
    fn test_wait_error_includes_pid() {
        let error = HarnessError::Wait {
            pid: 42,
            source: io::Error::new(io::ErrorKind::Other, "no child processes"),
        };
        assert_eq!(
            error.to_string(),
            "failed to wait for test process 42: no child processes"
        );
    }
}
