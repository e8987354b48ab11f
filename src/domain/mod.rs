//! Module for the types defining the test-data domain.

mod suite;

pub use suite::{MAX_TESTS, TestSuite};

use crate::error::Error;

/// A single unit of input for the judged program.
///
/// The problem takes exactly one value: an array of integers whose order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCase {
    values: Vec<i64>,
}

impl TestCase {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i64>> for TestCase {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[i64; N]> for TestCase {
    fn from(values: [i64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Inclusive interval `[low, high]` of permissible values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    low: i64,
    high: i64,
}

impl ValueRange {
    pub fn new(low: i64, high: i64) -> Result<Self, Error> {
        if low > high {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Only for compile-time constants whose bounds are known to be ordered.
    pub(crate) const fn new_unchecked(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of integers in the range. `u128` so that the full `i64` span fits.
    pub fn size(&self) -> u128 {
        u128::from(self.high.abs_diff(self.low)) + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}
