//! Secure randomness primitives: byte source, uniform index sampler, shuffle.
//!
//! This module provides:
//! - [`fill_random`] — the single platform byte source (`OsRng`)
//! - [`sample`] — an unbiased index in `[0, max)` via rejection sampling
//! - [`shuffled`] — a Fisher-Yates shuffled copy of a slice
//!
//! Every random decision in the crate flows through [`sample`], so all index
//! selection goes through one audited, modulo-bias-free path.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CoreError;

/// Width of the rejection-sampling draw window (2^32).
const UINT32_SPAN: u64 = 1 << 32;

/// Fill `buf` with cryptographically secure random bytes.
///
/// # Errors
///
/// Returns [`CoreError::Unavailable`] if the platform CSPRNG cannot be
/// reached. The failure propagates — there is deliberately no fallback to a
/// non-cryptographic source.
pub fn fill_random(buf: &mut [u8]) -> Result<(), CoreError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CoreError::Unavailable(format!("OS random source failed: {e}")))
}

/// Draw a uniformly distributed index in `[0, max)`.
///
/// Rejection sampling over a little-endian 32-bit draw: with
/// `limit = 2^32 − (2^32 mod max)`, any draw at or above `limit` is discarded
/// and redrawn. The rejected tail is what would otherwise skew the modulo,
/// so every accepted value carries identical probability mass.
///
/// `max == 1` returns `0` without consuming randomness.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `max` is zero or exceeds the
/// 32-bit draw space, and [`CoreError::Unavailable`] if the byte source
/// fails.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn sample(max: usize) -> Result<usize, CoreError> {
    if max < 1 {
        return Err(CoreError::InvalidArgument(
            "sample bound must be at least 1".to_string(),
        ));
    }
    if max == 1 {
        return Ok(0);
    }
    let bound = u64::try_from(max)
        .ok()
        .filter(|b| *b <= UINT32_SPAN)
        .ok_or_else(|| {
            CoreError::InvalidArgument(format!(
                "sample bound {max} exceeds the 32-bit draw space"
            ))
        })?;

    // bound >= 2 here, so the modulo cannot divide by zero and the loop
    // accepts with probability > 1/2 per draw.
    let limit = UINT32_SPAN - (UINT32_SPAN % bound);
    loop {
        let mut draw = [0u8; 4];
        fill_random(&mut draw)?;
        let r = u64::from(u32::from_le_bytes(draw));
        if r < limit {
            return Ok((r % bound) as usize);
        }
    }
}

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input slice is left untouched. Assuming an unbiased sampler, every
/// permutation of the result is equally likely.
///
/// # Errors
///
/// Returns [`CoreError::Unavailable`] if the byte source fails mid-shuffle.
#[allow(clippy::arithmetic_side_effects)]
pub fn shuffled<T: Clone>(items: &[T]) -> Result<Vec<T>, CoreError> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = sample(i + 1)?;
        out.swap(i, j);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_one_is_always_zero() {
        for _ in 0..32 {
            assert_eq!(sample(1).unwrap(), 0);
        }
    }

    #[test]
    fn sample_zero_is_rejected() {
        let err = sample(0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn sample_stays_in_range() {
        for max in [2, 3, 7, 10, 26, 1000] {
            for _ in 0..200 {
                assert!(sample(max).unwrap() < max);
            }
        }
    }

    #[test]
    fn sample_covers_small_range() {
        // With max=6 and 1200 draws the probability of missing any value is
        // negligible (~6 * (5/6)^1200).
        let mut seen = [false; 6];
        for _ in 0..1200 {
            seen[sample(6).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s), "not all values drawn: {seen:?}");
    }

    #[test]
    fn sample_rejects_oversized_bound() {
        if usize::BITS > 32 {
            let over = (1usize << 32) + 1;
            let err = sample(over).unwrap_err();
            assert!(matches!(err, CoreError::InvalidArgument(_)));
        }
    }

    #[test]
    fn shuffled_preserves_elements() {
        let input: Vec<u32> = (0..50).collect();
        let mut output = shuffled(&input).unwrap();
        output.sort_unstable();
        assert_eq!(input, output);
    }

    #[test]
    fn shuffled_leaves_input_untouched() {
        let input: Vec<u32> = (0..20).collect();
        let snapshot = input.clone();
        let _ = shuffled(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn shuffled_handles_trivial_inputs() {
        assert!(shuffled::<u8>(&[]).unwrap().is_empty());
        assert_eq!(shuffled(&[42]).unwrap(), vec![42]);
    }

    #[test]
    fn shuffled_actually_permutes() {
        // 30 elements: the identity permutation has probability 1/30!,
        // so two identical shuffles in a row means something is broken.
        let input: Vec<u32> = (0..30).collect();
        let a = shuffled(&input).unwrap();
        let b = shuffled(&input).unwrap();
        assert!(a != input || b != input);
    }

    #[test]
    fn fill_random_varies() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        fill_random(&mut a).unwrap();
        fill_random(&mut b).unwrap();
        assert_ne!(a, b, "two 128-bit draws collided");
    }
}
