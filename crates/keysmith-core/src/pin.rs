//! Numeric PIN generation.
//!
//! Candidates are drawn digit by digit and rejected until they satisfy the
//! enabled constraints. The retry loop is capped — hitting the cap signals a
//! configuration that is statistically impossible to satisfy, not an
//! expected outcome for realistic lengths.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::random::sample;

/// Retry cap for constraint rejection.
const MAX_ATTEMPTS: usize = 1000;

const ASCENDING: &str = "0123456789";
const DESCENDING: &str = "9876543210";

const DIGIT_CHARS: &[u8] = b"0123456789";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`generate_pin`].
///
/// Deserializing a partial configuration merges the supplied fields over
/// [`PinOptions::default`]; unset fields never override the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PinOptions {
    /// Number of digits (must be at least 1).
    pub length: usize,
    /// Permit PINs that are an exact run of ascending or descending digits.
    pub allow_sequential: bool,
    /// Permit PINs where every digit equals the first.
    pub allow_repeated: bool,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            length: 4,
            allow_sequential: false,
            allow_repeated: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// A PIN is sequential when it appears verbatim inside `0123456789` or its
/// reverse. Only exact ascending/descending runs match — never arbitrary
/// strides, and never candidates longer than 10 digits.
fn is_sequential(pin: &str) -> bool {
    ASCENDING.contains(pin) || DESCENDING.contains(pin)
}

/// A PIN is repeated when every digit equals the first.
fn is_repeated(pin: &str) -> bool {
    let mut chars = pin.chars();
    chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first))
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Generate a random numeric PIN satisfying the given options.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `length` is 0,
/// [`CoreError::Exhausted`] if no candidate satisfies the constraints within
/// 1000 attempts, and [`CoreError::Unavailable`] if the platform randomness
/// source fails.
pub fn generate_pin(options: &PinOptions) -> Result<String, CoreError> {
    if options.length < 1 {
        return Err(CoreError::InvalidArgument(
            "PIN length must be at least 1".to_string(),
        ));
    }

    for _ in 0..MAX_ATTEMPTS {
        let mut pin = String::with_capacity(options.length);
        for _ in 0..options.length {
            pin.push(char::from(DIGIT_CHARS[sample(DIGIT_CHARS.len())?]));
        }

        if !options.allow_sequential && is_sequential(&pin) {
            continue;
        }
        if !options.allow_repeated && is_repeated(&pin) {
            continue;
        }
        return Ok(pin);
    }

    Err(CoreError::Exhausted(format!(
        "no valid PIN found within {MAX_ATTEMPTS} attempts"
    )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        for length in [4, 6, 12] {
            let pin = generate_pin(&PinOptions {
                length,
                ..PinOptions::default()
            })
            .unwrap();
            assert_eq!(pin.len(), length);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn impossible_configuration_exhausts() {
        // A single digit always equals its own first character, so length 1
        // with repeats disallowed can never be satisfied.
        let err = generate_pin(&PinOptions {
            length: 1,
            ..PinOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::Exhausted(_)));
    }

    #[test]
    fn single_digit_works_when_constraints_allow() {
        // Any lone digit is both a substring of the ascending run and a
        // repeat of itself, so both toggles must be relaxed.
        let pin = generate_pin(&PinOptions {
            length: 1,
            allow_sequential: true,
            allow_repeated: true,
        })
        .unwrap();
        assert_eq!(pin.len(), 1);
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = generate_pin(&PinOptions {
            length: 0,
            ..PinOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn never_sequential_by_default() {
        for _ in 0..1000 {
            let pin = generate_pin(&PinOptions::default()).unwrap();
            assert!(!ASCENDING.contains(&pin), "sequential PIN: {pin}");
            assert!(!DESCENDING.contains(&pin), "reverse-sequential PIN: {pin}");
        }
    }

    #[test]
    fn never_repeated_by_default() {
        for _ in 0..1000 {
            let pin = generate_pin(&PinOptions::default()).unwrap();
            let first = pin.chars().next().unwrap();
            assert!(
                !pin.chars().all(|c| c == first),
                "repeated PIN: {pin}"
            );
        }
    }

    #[test]
    fn allow_toggles_do_not_break_generation() {
        let pin = generate_pin(&PinOptions {
            allow_sequential: true,
            allow_repeated: true,
            ..PinOptions::default()
        })
        .unwrap();
        assert_eq!(pin.len(), 4);
    }

    #[test]
    fn long_pins_are_never_flagged_sequential() {
        // An 11-digit candidate can never be a substring of the 10-digit
        // reference runs, so generation must succeed immediately.
        let pin = generate_pin(&PinOptions {
            length: 11,
            ..PinOptions::default()
        })
        .unwrap();
        assert_eq!(pin.len(), 11);
    }

    #[test]
    fn sequential_detection_matches_exact_runs_only() {
        assert!(is_sequential("1234"));
        assert!(is_sequential("6789"));
        assert!(is_sequential("9876"));
        assert!(is_sequential("3210"));
        // Wrap-around and strided sequences are not flagged.
        assert!(!is_sequential("9012"));
        assert!(!is_sequential("1357"));
        assert!(!is_sequential("1243"));
    }

    #[test]
    fn repeated_detection() {
        assert!(is_repeated("1111"));
        assert!(is_repeated("7"));
        assert!(!is_repeated("1112"));
        assert!(!is_repeated(""));
    }
}
