use anyhow::Context;
use clap::Parser;
use isotest::{check, check_eq, register, Registry, RunnerOptions, TestResult};
use std::io::Write;

#[derive(Parser)]
#[command(name = "isotest")]
#[command(about = "Runs the isotest self-check suite")]
#[command(version)]
struct Cli {
    /// Run each test in its own child process (also ISOTEST_ISOLATE=1)
    #[arg(long)]
    isolate: bool,

    /// Exit with a failure status if any test failed (also ISOTEST_EXIT_ON_FAILURE=1)
    #[arg(long)]
    exit_on_failure: bool,

    /// Also register tests that fail, panic and (with --isolate) abort
    #[arg(long)]
    with_failures: bool,
}

fn empty_vector_is_empty() -> TestResult {
    let names: Vec<String> = Vec::new();
    check!(names.is_empty());
    Ok(())
}

fn addition_holds() -> TestResult {
    check_eq!(5, 2 + 3);
    Ok(())
}

fn mismatched_values() -> TestResult {
    check_eq!(1, 2, "this test fails on purpose");
    Ok(())
}

fn unexpected_panic() -> TestResult {
    let values: Vec<u32> = Vec::new();
    check!(values.first().copied().unwrap_or_else(|| panic!("no values")) > 0);
    Ok(())
}

fn aborts_process() -> TestResult {
    std::process::abort()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = RunnerOptions {
        isolate: cli.isolate,
        exit_on_failure: cli.exit_on_failure,
    }
    .merge(RunnerOptions::from_env());

    let mut registry = Registry::new();
    register!(registry, empty_vector_is_empty, addition_holds);
    if cli.with_failures {
        register!(registry, mismatched_values, unexpected_panic);
        // Aborting without isolation would take the whole harness down.
        if options.isolate {
            register!(registry, aborts_process);
        }
    }

    isotest::runner::run_with(&registry, options);

    std::io::stdout()
        .flush()
        .context("Failed to flush test output")?;
    Ok(())
}
