//! Assertion macros.
//!
//! Every macro must be used inside a function returning
//! [`TestResult`](crate::TestResult). On failure the diagnostic is written to
//! stdout and the enclosing function returns `Err(Failure)`, so nothing after
//! the failed check runs. Optional trailing `format!` arguments become an
//! indented detail line, formatted only when the check fails.

#[doc(hidden)]
#[macro_export]
macro_rules! __check_detail {
    () => {
        ::std::string::String::new
    };
    ($($arg:tt)+) => {
        || ::std::format!($($arg)+)
    };
}

/// Checks that an expression is `true`.
#[macro_export]
macro_rules! check {
    ($cond:expr $(, $($arg:tt)+)?) => {{
        let value: bool = $cond;
        $crate::assertions::AssertionResult::evaluate(value, || {
            $crate::assertions::describe_truth("CHECK", ::std::stringify!($cond), value, true)
        })
        .or_fail_with(
            ::std::file!(),
            ::std::line!(),
            $crate::__check_detail!($($($arg)+)?),
        )?;
    }};
}

/// Checks that an expression is `false`.
#[macro_export]
macro_rules! check_false {
    ($cond:expr $(, $($arg:tt)+)?) => {{
        let value: bool = $cond;
        $crate::assertions::AssertionResult::evaluate(!value, || {
            $crate::assertions::describe_truth(
                "CHECK_FALSE",
                ::std::stringify!($cond),
                value,
                false,
            )
        })
        .or_fail_with(
            ::std::file!(),
            ::std::line!(),
            $crate::__check_detail!($($($arg)+)?),
        )?;
    }};
}

/// Checks that two expressions are equal, rendering both with `Debug` on
/// failure.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(, $($arg:tt)+)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                $crate::assertions::AssertionResult::evaluate(*left == *right, || {
                    $crate::assertions::describe_comparison(
                        "CHECK_EQ",
                        "equal",
                        ::std::stringify!($left),
                        left,
                        ::std::stringify!($right),
                        right,
                    )
                })
                .or_fail_with(
                    ::std::file!(),
                    ::std::line!(),
                    $crate::__check_detail!($($($arg)+)?),
                )?;
            }
        }
    }};
}

/// Checks that two expressions are not equal.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr $(, $($arg:tt)+)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                $crate::assertions::AssertionResult::evaluate(*left != *right, || {
                    $crate::assertions::describe_comparison(
                        "CHECK_NE",
                        "not equal",
                        ::std::stringify!($left),
                        left,
                        ::std::stringify!($right),
                        right,
                    )
                })
                .or_fail_with(
                    ::std::file!(),
                    ::std::line!(),
                    $crate::__check_detail!($($($arg)+)?),
                )?;
            }
        }
    }};
}

/// Checks that an expression evaluates to an `Err` matching `pattern`.
///
/// ```ignore
/// check_err!("x".parse::<u8>(), _);
/// check_err!(open(path), io::ErrorKind::NotFound);
/// ```
#[macro_export]
macro_rules! check_err {
    ($expr:expr, $pattern:pat $(, $($arg:tt)+)?) => {{
        let result = $expr;
        $crate::assertions::raises::expect_err(
            &result,
            |error| ::std::matches!(error, $pattern),
            ::std::stringify!($pattern),
            ::std::stringify!($expr),
        )
        .or_fail_with(
            ::std::file!(),
            ::std::line!(),
            $crate::__check_detail!($($($arg)+)?),
        )?;
    }};
}

/// Checks that a block panics with a payload of the given type.
///
/// `String` and `&'static str` both accept any `panic!` message; other types
/// must match the `panic_any` payload exactly. The panic hook still runs, so
/// the usual "panicked at" line appears on stderr even when the check passes.
#[macro_export]
macro_rules! check_panics {
    ($payload:ty, $body:block $(, $($arg:tt)+)?) => {{
        $crate::assertions::raises::expect_panic::<$payload, _, _>(
            || $body,
            ::std::stringify!($payload),
            ::std::stringify!($body),
        )
        .or_fail_with(
            ::std::file!(),
            ::std::line!(),
            $crate::__check_detail!($($($arg)+)?),
        )?;
    }};
}
