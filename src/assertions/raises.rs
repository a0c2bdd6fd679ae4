//! Support for the error-expectation checks (`check_err!`, `check_panics!`).

use crate::assertions::AssertionResult;
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

pub fn expect_err<T, E: Debug>(
    result: &Result<T, E>,
    matches: impl FnOnce(&E) -> bool,
    expected: &str,
    code: &str,
) -> AssertionResult {
    match result {
        Err(error) if matches(error) => AssertionResult::passed(),
        Err(error) => AssertionResult::failed(format!(
            "CHECK_ERR - expected an error matching '{}' from the following code:\n  {}\nbut a different error was returned: {:?}",
            expected, code, error
        )),
        Ok(_) => AssertionResult::failed(format!(
            "CHECK_ERR - expected an error matching '{}' from the following code:\n  {}\nbut no error was returned.",
            expected, code
        )),
    }
}

/// Runs `body` and expects it to panic with a payload of type `P`.
///
/// `&'static str` and `String` are the same kind here, the panic message:
/// which one `panic!` produces depends on whether the compiler could fold the
/// format string, not on the code under test.
pub fn expect_panic<P, F, R>(body: F, expected: &str, code: &str) -> AssertionResult
where
    P: Any,
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Err(payload) if payload_matches::<P>(payload.as_ref()) => AssertionResult::passed(),
        Err(payload) => AssertionResult::failed(format!(
            "CHECK_PANICS - expected a panic with a '{}' payload from the following code:\n  {}\nbut a different panic occurred: {}",
            expected,
            code,
            describe_payload(payload.as_ref())
        )),
        Ok(_) => AssertionResult::failed(format!(
            "CHECK_PANICS - expected a panic with a '{}' payload from the following code:\n  {}\nbut no panic occurred.",
            expected, code
        )),
    }
}

fn payload_matches<P: Any>(payload: &(dyn Any + Send)) -> bool {
    if payload.is::<P>() {
        return true;
    }
    is_message_type::<P>() && panic_message(payload).is_some()
}

fn is_message_type<P: Any>() -> bool {
    let expected = TypeId::of::<P>();
    expected == TypeId::of::<String>() || expected == TypeId::of::<&'static str>()
}

/// The message of a panic raised by `panic!`, whichever string type carries
/// it.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

/// Renders a panic payload as its type plus message, for the two payload
/// types `panic!` produces.
pub fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        format!("&str({:?})", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("String({:?})", message)
    } else {
        "<non-string payload>".to_string()
    }
}
