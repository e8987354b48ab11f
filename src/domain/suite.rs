use crate::domain::TestCase;
use crate::error::Error;

/// Hard cap on the number of test cases a judge accepts for one problem.
pub const MAX_TESTS: usize = 15;

/// Ordered, bounded collection of test cases.
///
/// The insertion order is the canonical order: it decides the index a case is addressed by and the
/// suffix of its file in directory mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    tests: Vec<TestCase>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a test case. Fails without touching the suite once it holds [`MAX_TESTS`] cases.
    pub fn add(&mut self, test: impl Into<TestCase>) -> Result<(), Error> {
        if self.tests.len() == MAX_TESTS {
            return Err(Error::Capacity { max: MAX_TESTS });
        }
        self.tests.push(test.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&TestCase, Error> {
        self.tests.get(index).ok_or(Error::TestIdOutOfRange {
            id: index,
            len: self.tests.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.tests.iter()
    }
}
