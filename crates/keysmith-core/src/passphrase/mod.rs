//! Word-based passphrase generation.
//!
//! Words are drawn independently and with replacement from the selected
//! wordlist, then optionally remapped from Hangul to QWERTY keystrokes,
//! decorated with a trailing digit, case-transformed, and leet-substituted —
//! always per word, so the output word count matches the request exactly.

pub mod wordlists;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::hangul;
use crate::random::sample;
use crate::transform::{leet_substitute, transform_case, CaseTransform};

const DIGIT_CHARS: &[u8] = b"0123456789";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Wordlist language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// General-purpose English wordlist.
    English,
    /// Korean wordlist (Hangul syllables).
    Korean,
}

/// Configuration for [`generate_passphrase`].
///
/// Deserializing a partial configuration merges the supplied fields over
/// [`PassphraseOptions::default`]; unset fields never override the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassphraseOptions {
    /// Number of words to draw.
    pub word_count: usize,
    /// Separator placed between words.
    pub separator: String,
    /// Legacy title-casing toggle. An explicit `case_transform` wins over
    /// this; it applies only to English or keyboard-converted words
    /// (title-casing untouched Hangul is meaningless and skipped).
    pub capitalize: bool,
    /// Append one random digit to one randomly chosen word.
    pub include_digit: bool,
    /// Which wordlist to draw from.
    pub language: Language,
    /// Korean only: remap each word's Hangul syllables to the QWERTY
    /// keystrokes that would type them.
    pub qwerty_convert: bool,
    /// Explicit case transform applied to every word.
    pub case_transform: Option<CaseTransform>,
    /// Apply leet substitution after casing.
    pub leet: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            include_digit: true,
            language: Language::English,
            qwerty_convert: false,
            case_transform: None,
            leet: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Generate a passphrase satisfying the given options.
///
/// Words are drawn with replacement — repeats across positions are
/// permitted. Transforms operate per word and never merge or split words, so
/// `result.split(separator)` always yields `word_count` entries.
///
/// # Errors
///
/// Returns [`CoreError::Configuration`] if the selected wordlist is empty
/// and [`CoreError::Unavailable`] if the platform randomness source fails.
pub fn generate_passphrase(options: &PassphraseOptions) -> Result<String, CoreError> {
    let wordlist = wordlists::get_wordlist(options.language);
    if wordlist.is_empty() {
        return Err(CoreError::Configuration(format!(
            "wordlist for {:?} is empty or not found",
            options.language
        )));
    }

    let mut words: Vec<String> = Vec::with_capacity(options.word_count);
    for _ in 0..options.word_count {
        words.push(wordlist[sample(wordlist.len())?].to_string());
    }

    // Keyboard conversion happens first so every later transform sees ASCII.
    let keyboard_converted = options.language == Language::Korean && options.qwerty_convert;
    if keyboard_converted {
        for word in &mut words {
            *word = hangul::to_qwerty_keystrokes(word);
        }
    }

    if options.include_digit && !words.is_empty() {
        let target = sample(words.len())?;
        let digit = DIGIT_CHARS[sample(DIGIT_CHARS.len())?];
        words[target].push(char::from(digit));
    }

    for word in &mut words {
        if let Some(case) = options.case_transform {
            *word = transform_case(word, case);
        } else if options.capitalize
            && (options.language == Language::English || keyboard_converted)
        {
            *word = transform_case(word, CaseTransform::Titlecase);
        }

        if options.leet {
            *word = leet_substitute(word);
        }
    }

    Ok(words.join(&options.separator))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
