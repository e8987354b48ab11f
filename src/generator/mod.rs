//! Module for the core logic producing the values of each test case

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::{
    domain::{TestCase, TestSuite, ValueRange},
    error::Error,
};


/// Seed of the random stream driving the whole generation.
pub const SEED: u64 = 42;

/// Range every generated value is drawn from.
pub const VALUE_RANGE: ValueRange = ValueRange::new_unchecked(1, 1_000_000_000);

pub const SMALL_N: usize = 10;
pub const LARGE_N: usize = 100_000;

/// Generated cases as `(size, repetitions)`, produced in this order after the samples.
pub const REGIMES: &[(usize, usize)] = &[(SMALL_N, 3), (LARGE_N, 7)];

/// Hand-authored cases placed at the front of every suite.
pub fn samples() -> Vec<TestCase> {
    vec![
        TestCase::from([3, 1, 2]),
        TestCase::from([5, 2, 3, 16, 1, 4]),
        TestCase::from([5, 4, 3, 2, 1]),
    ]
}

/// Describes how a suite is assembled: fixed samples first, then the generated regimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePlan {
    pub samples: Vec<TestCase>,
    pub range: ValueRange,
    pub regimes: Vec<(usize, usize)>,
}

impl Default for SuitePlan {
    fn default() -> Self {
        Self {
            samples: samples(),
            range: VALUE_RANGE,
            regimes: REGIMES.to_vec(),
        }
    }
}

impl SuitePlan {
    /// Number of cases the plan produces.
    pub fn num_tests(&self) -> usize {
        self.samples.len() + self.regimes.iter().map(|(_, reps)| reps).sum::<usize>()
    }
}

///
/// Builds the suite described by `plan`, drawing all random values from `rng` in a fixed order.
///
/// The same plan and an identically seeded `rng` always produce the same suite.
///
pub fn build_suite(plan: &SuitePlan, rng: &mut impl Rng) -> Result<TestSuite, Error> {
    let mut suite = TestSuite::new();

    for sample in &plan.samples {
        suite.add(sample.clone())?;
    }

    for &(n, reps) in &plan.regimes {
        for rep in 0..reps {
            let values = generate_unique_values(n, plan.range, rng)?;
            debug!(n, rep, "generated test case");
            suite.add(values)?;
        }
    }

    info!(num_tests = suite.len(), "test suite built");
    Ok(suite)
}

///
/// Returns `n` distinct values from `range`, in an order determined by `rng`.
///
/// Both bounds of the range are always part of the result (as far as `n` allows), the rest is
/// filled by drawing uniformly and discarding values that were already drawn.
///
/// Rejection sampling slows down sharply as `n` approaches the size of the range; requests for
/// more values than the range holds are rejected up front.
///
pub fn generate_unique_values(
    n: usize,
    range: ValueRange,
    rng: &mut impl Rng,
) -> Result<Vec<i64>, Error> {
    let available = range.size();
    if n as u128 > available {
        return Err(Error::RangeTooSmall {
            requested: n,
            available,
        });
    }

    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);

    for bound in [range.low(), range.high()] {
        if values.len() < n && seen.insert(bound) {
            values.push(bound);
        }
    }

    while values.len() < n {
        let candidate = rng.gen_range(range.low()..=range.high());
        if seen.insert(candidate) {
            values.push(candidate);
        }
    }
    debug_assert_eq!(values.len(), n);

    values.shuffle(rng);
    Ok(values)
}
