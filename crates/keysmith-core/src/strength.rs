//! Heuristic password strength analysis.
//!
//! The score is a zxcvbn-style 0-4 scale: an integer accumulator collects
//! length and variety bonuses, pattern penalties, and an entropy adjustment,
//! then is halved, floored, and clamped. The entropy estimate is an upper
//! bound on guessing difficulty (length × log2 of the union of observed
//! character-class pools), not a measurement of true randomness.

use serde::Serialize;

use crate::keyboard;

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Character-class pool sizes: lowercase, uppercase, digits, Hangul
/// syllables, and a single bucket for everything else.
const POOL_LOWER: u32 = 26;
const POOL_UPPER: u32 = 26;
const POOL_DIGIT: u32 = 10;
const POOL_HANGUL: u32 = 11_172;
const POOL_SPECIAL: u32 = 32;

/// Labels indexed by score.
const LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];

/// Display colors indexed by score.
const COLORS: [&str; 5] = ["red", "orange", "yellow", "lime", "green"];

/// Trivial prefixes penalized case-insensitively. The check is anchored at
/// the start of the password, not a substring search.
const COMMON_PREFIXES: [&str; 5] = ["123", "abc", "qwe", "password", "admin"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Result of a strength analysis. Derived purely from the input string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// 0 = very weak .. 4 = very strong.
    pub score: u8,
    /// Human-readable tier label.
    pub label: &'static str,
    /// Display color for the tier.
    pub color: &'static str,
    /// Estimated entropy in bits (floored).
    pub entropy: u32,
    /// Ordered, distinct diagnostic warnings.
    pub warnings: Vec<String>,
}

/// Which character classes appear in a password.
#[derive(Clone, Copy, Default)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    hangul: bool,
    special: bool,
}

fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7AF}').contains(&c)
}

fn classify(password: &str) -> CharClasses {
    let mut classes = CharClasses::default();
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            classes.lower = true;
        } else if c.is_ascii_uppercase() {
            classes.upper = true;
        } else if c.is_ascii_digit() {
            classes.digit = true;
        } else if is_hangul(c) {
            classes.hangul = true;
        } else {
            classes.special = true;
        }
    }
    classes
}

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Estimate password entropy in bits: `floor(length × log2(poolSize))`,
/// where the pool is the union of fixed class pools observed in the string.
///
/// Returns 0 for the empty string.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn calculate_entropy(password: &str) -> u32 {
    if password.is_empty() {
        return 0;
    }

    let classes = classify(password);
    let mut pool: u32 = 0;
    if classes.lower {
        pool += POOL_LOWER;
    }
    if classes.upper {
        pool += POOL_UPPER;
    }
    if classes.digit {
        pool += POOL_DIGIT;
    }
    if classes.hangul {
        pool += POOL_HANGUL;
    }
    if classes.special {
        pool += POOL_SPECIAL;
    }
    if pool == 0 {
        return 0;
    }

    let length = password.chars().count();
    (length as f64 * f64::from(pool).log2()).floor() as u32
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Any character repeated 3+ times consecutively.
fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Case-insensitive check against the anchored trivial-prefix list.
fn has_common_prefix(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Analyze a password and produce a [`StrengthReport`].
///
/// The empty string scores 0 ("Very Weak") with zero entropy and no
/// warnings. Deterministic: the same input always yields the same report.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn calculate_strength(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            label: LABELS[0],
            color: COLORS[0],
            entropy: 0,
            warnings: Vec::new(),
        };
    }

    let mut score: i32 = 0;
    let length = password.chars().count();
    let entropy = calculate_entropy(password);
    let mut warnings: Vec<String> = Vec::new();

    // Length bonuses.
    for threshold in [8, 12, 16, 20] {
        if length >= threshold {
            score += 1;
        }
    }

    // Variety bonuses.
    let classes = classify(password);
    let variety = [
        classes.lower,
        classes.upper,
        classes.digit,
        classes.special,
        classes.hangul,
    ]
    .iter()
    .filter(|present| **present)
    .count();
    for threshold in [2, 3, 4] {
        if variety >= threshold {
            score += 1;
        }
    }

    // Pattern penalties.
    if password.chars().all(|c| c.is_ascii_alphabetic()) {
        score -= 1;
        warnings.push("Letters only".to_string());
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        score -= 2;
        warnings.push("Numbers only".to_string());
    }
    if has_triple_repeat(password) {
        score -= 1;
        warnings.push("Repeated characters".to_string());
    }
    if has_common_prefix(password) {
        score -= 2;
        warnings.push("Common pattern detected".to_string());
    }

    let keyboard_warnings = keyboard::detect_patterns(password);
    if !keyboard_warnings.is_empty() {
        score -= 2;
        warnings.extend(keyboard_warnings);
    }

    // Entropy adjustment.
    if entropy > 120 {
        score += 2;
    } else if entropy > 80 {
        score += 1;
    } else if entropy < 40 {
        score -= 1;
    }

    // div_euclid floors toward negative infinity, matching the reference
    // floor-then-clamp arithmetic exactly.
    let tier = score.div_euclid(2).clamp(0, 4) as usize;

    StrengthReport {
        score: tier as u8,
        label: LABELS[tier],
        color: COLORS[tier],
        entropy,
        warnings,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
