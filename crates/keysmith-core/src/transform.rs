//! Per-word text transforms consumed by the passphrase builder.
//!
//! Pure functions, no randomness.

use serde::{Deserialize, Serialize};

/// Case transform applied to a whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// `hello world`
    Lowercase,
    /// `HELLO WORLD`
    Uppercase,
    /// `Hello world` — first character upper, the rest lower.
    Titlecase,
}

/// Apply a [`CaseTransform`] to `text`.
#[must_use]
pub fn transform_case(text: &str, transform: CaseTransform) -> String {
    match transform {
        CaseTransform::Lowercase => text.to_lowercase(),
        CaseTransform::Uppercase => text.to_uppercase(),
        CaseTransform::Titlecase => {
            let mut chars = text.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        }
    }
}

/// Substitute leet-speak digits for the classic letter set, both cases.
///
/// Unmapped characters pass through unchanged.
#[must_use]
pub fn leet_substitute(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a' | 'A' => '4',
            'e' | 'E' => '3',
            'i' | 'I' | 'l' | 'L' => '1',
            'o' | 'O' => '0',
            's' | 'S' => '5',
            't' | 'T' => '7',
            'b' | 'B' => '8',
            'g' | 'G' => '9',
            'z' | 'Z' => '2',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
