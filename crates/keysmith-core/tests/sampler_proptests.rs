#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the uniform index sampler and shuffle.

use std::collections::HashMap;

use proptest::prelude::*;
use keysmith_core::{sample, shuffled, CoreError};

proptest! {
    /// Every draw lands in `[0, max)`.
    #[test]
    fn sample_is_in_range(max in 1usize..10_000) {
        let value = sample(max).unwrap();
        prop_assert!(value < max);
    }

    /// The degenerate bound never consumes randomness and always yields 0.
    #[test]
    fn sample_one_is_zero(_dummy in 0u8..8) {
        prop_assert_eq!(sample(1).unwrap(), 0);
    }

    /// Shuffling preserves the multiset of elements and leaves the input
    /// untouched.
    #[test]
    fn shuffle_is_a_permutation(input in proptest::collection::vec(any::<u16>(), 0..64)) {
        let snapshot = input.clone();
        let mut output = shuffled(&input).unwrap();
        prop_assert_eq!(&input, &snapshot);
        output.sort_unstable();
        let mut expected = input;
        expected.sort_unstable();
        prop_assert_eq!(output, expected);
    }
}

#[test]
fn sample_rejects_zero() {
    assert!(matches!(sample(0), Err(CoreError::InvalidArgument(_))));
}

/// Coarse uniformity check: over many draws, each value of a small range
/// appears within a generous band around the expected frequency. This is a
/// smoke test against gross modulo bias, not a rigorous chi-square.
#[test]
fn sample_distribution_is_roughly_uniform() {
    const MAX: usize = 10;
    const DRAWS: usize = 20_000;
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(sample(MAX).unwrap()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), MAX, "some values never drawn: {counts:?}");

    // Expected 2000 per bucket; 6 sigma is ~255. A band of ±500 keeps the
    // flake rate negligible while still catching a skewed sampler.
    for (value, count) in &counts {
        assert!(
            (1500..=2500).contains(count),
            "value {value} drawn {count} times over {DRAWS} draws"
        );
    }
}

/// A bound that does not divide 2^32 evenly still shows no bias at the seam.
/// With naive modulo over a 32-bit draw, residues below `2^32 mod max` would
/// be overrepresented; rejection sampling removes that edge.
#[test]
fn sample_covers_non_power_of_two_bounds() {
    const MAX: usize = 7;
    let mut seen = [false; MAX];
    for _ in 0..2000 {
        seen[sample(MAX).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
