//! Character-based random password generation.
//!
//! The builder assembles a combined alphabet from the enabled character
//! classes, draws each class's minimum from that class's own pool, fills the
//! rest from the combined alphabet, and Fisher-Yates shuffles the result so
//! required characters are not clustered at the front.
//!
//! Degenerate configurations degrade gracefully instead of erroring: with no
//! class enabled the lowercase pool is used, and minimums can stretch the
//! output beyond the requested length but never shrink it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::random::{sample, shuffled};

// ---------------------------------------------------------------------------
// Character pools
// ---------------------------------------------------------------------------

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPERCASE_NO_AMBIGUOUS: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ"; // No I, L, O
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LOWERCASE_NO_AMBIGUOUS: &[u8] = b"abcdefghjkmnpqrstuvwxyz"; // No i, l, o
const DIGITS: &[u8] = b"0123456789";
const DIGITS_NO_AMBIGUOUS: &[u8] = b"23456789"; // No 0, 1
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`generate_password`].
///
/// Deserializing a partial configuration merges the supplied fields over
/// [`PasswordOptions::default`]; unset fields never override the defaults.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordOptions {
    /// Target length. Minimum counts may force the output longer.
    pub length: usize,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include special characters (!@#$%^&*...).
    pub special: bool,
    /// Include visually ambiguous glyphs (I, l, 1, 0, O). When false, each
    /// class pool drops exactly those glyphs.
    pub ambiguous: bool,
    /// Minimum number of uppercase characters (when uppercase is enabled).
    pub min_uppercase: usize,
    /// Minimum number of lowercase characters (when lowercase is enabled).
    pub min_lowercase: usize,
    /// Minimum number of digits (when digits are enabled).
    pub min_digits: usize,
    /// Minimum number of special characters (when special is enabled).
    pub min_special: usize,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            ambiguous: false,
            min_uppercase: 1,
            min_lowercase: 1,
            min_digits: 1,
            min_special: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Draw `count` characters from `pool` into `required`.
fn draw_required(pool: &[u8], count: usize, required: &mut Vec<u8>) -> Result<(), CoreError> {
    for _ in 0..count {
        required.push(pool[sample(pool.len())?]);
    }
    Ok(())
}

/// Generate a random password satisfying the given options.
///
/// The output length is `max(length, sum of enabled minimums)` — minimums
/// can force the output longer than requested, but never shorter. Requesting
/// length 0 with all minimums 0 yields the empty string. No configuration is
/// rejected; with every class disabled the lowercase pool is used so a
/// non-zero length never produces an empty alphabet.
///
/// # Errors
///
/// Returns [`CoreError::Unavailable`] if the platform randomness source
/// fails.
///
/// # Panics
///
/// Panics if the generated bytes are not valid UTF-8 (cannot happen — all
/// pools are ASCII).
pub fn generate_password(options: &PasswordOptions) -> Result<String, CoreError> {
    let upper = if options.ambiguous {
        UPPERCASE
    } else {
        UPPERCASE_NO_AMBIGUOUS
    };
    let lower = if options.ambiguous {
        LOWERCASE
    } else {
        LOWERCASE_NO_AMBIGUOUS
    };
    let digits = if options.ambiguous {
        DIGITS
    } else {
        DIGITS_NO_AMBIGUOUS
    };

    let mut pool: Vec<u8> = Vec::new();
    let mut required: Vec<u8> = Vec::new();

    if options.uppercase {
        pool.extend_from_slice(upper);
        draw_required(upper, options.min_uppercase, &mut required)?;
    }
    if options.lowercase {
        pool.extend_from_slice(lower);
        draw_required(lower, options.min_lowercase, &mut required)?;
    }
    if options.digits {
        pool.extend_from_slice(digits);
        draw_required(digits, options.min_digits, &mut required)?;
    }
    if options.special {
        pool.extend_from_slice(SPECIAL);
        draw_required(SPECIAL, options.min_special, &mut required)?;
    }

    // No class enabled: fall back to the lowercase pool rather than ever
    // producing an empty alphabet for a non-zero length.
    if pool.is_empty() {
        pool.extend_from_slice(LOWERCASE_NO_AMBIGUOUS);
    }

    let remaining = options.length.saturating_sub(required.len());
    let mut chars = required;
    chars.reserve(remaining);
    for _ in 0..remaining {
        chars.push(pool[sample(pool.len())?]);
    }

    let mixed = shuffled(&chars)?;
    Ok(String::from_utf8(mixed).expect("password pools are ASCII"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
