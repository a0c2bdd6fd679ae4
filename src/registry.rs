//! Test case registry
//!
//! Tests are registered explicitly, in order, before the run starts. The runner
//! only ever sees `&Registry`, so registration and execution cannot overlap.

use crate::assertions::TestResult;
use std::fmt;

pub type TestFn = Box<dyn Fn() -> TestResult>;

pub struct TestCase {
    name: String,
    body: TestFn,
}

impl TestCase {
    pub fn new(name: impl Into<String>, body: impl Fn() -> TestResult + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self) -> TestResult {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Ordered collection of test cases. Insertion order is execution order and
/// duplicate names are kept as separate entries.
#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Fn() -> TestResult + 'static,
    ) -> &mut Self {
        self.tests.push(TestCase::new(name, body));
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.tests.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Registers plain test functions, named after their identifiers.
///
/// ```ignore
/// let mut registry = Registry::new();
/// register!(registry, parses_header, rejects_empty_input);
/// ```
#[macro_export]
macro_rules! register {
    ($registry:expr, $($test:ident),+ $(,)?) => {{
        let registry: &mut $crate::Registry = &mut $registry;
        $(
            registry.register(::std::stringify!($test), $test);
        )+
    }};
}
