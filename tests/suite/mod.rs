//! Integration tests for the suite built with the fixed plan and seed

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use testgen_rs::{LARGE_N, SEED, SMALL_N, SuitePlan, TestSuite, VALUE_RANGE, build_suite, samples};

fn default_suite() -> TestSuite {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    build_suite(&SuitePlan::default(), &mut rng).expect("default plan fits into a suite")
}

#[test]
fn default_suite_layout() {
    let suite = default_suite();

    assert_eq!(suite.len(), 13);
    for (i, sample) in samples().iter().enumerate() {
        assert_eq!(suite.get(i).unwrap(), sample, "sample {i} out of place");
    }

    let sizes: Vec<usize> = suite.iter().skip(3).map(|case| case.len()).collect();
    let mut expected = vec![SMALL_N; 3];
    expected.extend([LARGE_N; 7]);
    assert_eq!(sizes, expected);
}

#[test]
fn generated_cases_are_unique_and_in_range() {
    let suite = default_suite();

    for (i, case) in suite.iter().enumerate().skip(3) {
        let values = case.values();
        let distinct: HashSet<i64> = values.iter().copied().collect();
        assert_eq!(distinct.len(), values.len(), "case {i} has duplicates");
        assert!(values.iter().all(|&v| VALUE_RANGE.contains(v)), "case {i} leaves the range");
        assert!(distinct.contains(&VALUE_RANGE.low()), "case {i} misses the lower bound");
        assert!(distinct.contains(&VALUE_RANGE.high()), "case {i} misses the upper bound");
    }
}

#[test]
fn repetitions_within_a_regime_differ() {
    let suite = default_suite();

    let small: Vec<_> = suite.iter().skip(3).take(3).collect();
    assert_ne!(small[0], small[1]);
    assert_ne!(small[1], small[2]);
}

#[test]
fn two_runs_build_identical_suites() {
    assert_eq!(default_suite(), default_suite());
}
