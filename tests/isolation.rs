//! Fork-based execution. Kept to a single test so no other test thread is
//! alive while the runner forks.
#![cfg(unix)]

use assert_matches::assert_matches;
use isotest::{check, check_eq, Outcome, Registry, Runner, RunnerOptions, TestResult, TextReporter};

fn passes() -> TestResult {
    check!(Vec::<u8>::new().is_empty());
    Ok(())
}

fn fails() -> TestResult {
    check_eq!(1, 2);
    Ok(())
}

fn panics() -> TestResult {
    panic!("escaped the test body");
}

fn aborts() -> TestResult {
    std::process::abort()
}

fn terminated() -> TestResult {
    // Safety: raising a signal at ourselves has no memory-safety implications.
    unsafe {
        libc::raise(libc::SIGTERM);
    }
    Ok(())
}

fn leaves_state_behind() -> TestResult {
    // Only the child's copy of the environment changes.
    std::env::set_var("ISOTEST_CHILD_MARKER", "1");
    Ok(())
}

#[test]
fn test_isolated_run() {
    let mut registry = Registry::new();
    registry
        .register("passes", passes)
        .register("fails", fails)
        .register("aborts", aborts)
        .register("after_abort", passes)
        .register("panics", panics)
        .register("terminated", terminated)
        .register("leaves_state_behind", leaves_state_behind)
        .register("after_terminated", passes);

    let options = RunnerOptions {
        isolate: true,
        exit_on_failure: false,
    };
    let mut runner = Runner::new(options, TextReporter::new(Vec::new(), Vec::new()));
    let report = runner.run(&registry);

    let outcome = |index: usize| report.records[index].outcome().cloned();

    assert_eq!(report.records.len(), registry.len());
    assert_eq!(outcome(0), Some(Outcome::Passed));
    assert_eq!(outcome(1), Some(Outcome::Failed));
    assert_matches!(
        outcome(2),
        Some(Outcome::Crashed { signal, .. }) if signal == libc::SIGABRT
    );
    assert_eq!(outcome(3), Some(Outcome::Passed));
    assert_eq!(outcome(4), Some(Outcome::Failed));
    assert_matches!(
        outcome(5),
        Some(Outcome::Crashed { signal, .. }) if signal == libc::SIGTERM
    );
    assert_eq!(outcome(6), Some(Outcome::Passed));
    assert_eq!(outcome(7), Some(Outcome::Passed));
    assert!(std::env::var("ISOTEST_CHILD_MARKER").is_err());

    assert_eq!(report.summary.passed, 4);
    assert_eq!(report.summary.failed, 4);
    assert_eq!(report.summary.errored, 0);

    let (out, err) = runner.into_reporter().into_inner();
    let out = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&out));
    assert!(out.contains("Test aborts failed. Signal: "));
    assert!(out.contains("Test after_abort passed."));
    assert!(out.ends_with("## TESTS FAILED ##\n"));
    assert!(err.is_empty());
}
