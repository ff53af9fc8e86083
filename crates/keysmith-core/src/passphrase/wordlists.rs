//! Passphrase wordlist loading.
//!
//! Both wordlists are embedded at compile time via `include_str!` and parsed
//! once on first access using `OnceLock`.

use std::sync::OnceLock;

use super::Language;

/// Number of words in the English wordlist (10 bits of entropy per word).
pub const ENGLISH_WORDLIST_SIZE: usize = 1024;

/// Number of words in the Korean wordlist (8 bits of entropy per word).
pub const KOREAN_WORDLIST_SIZE: usize = 256;

const ENGLISH_RAW: &str = include_str!("wordlists/english.txt");
const KOREAN_RAW: &str = include_str!("wordlists/korean.txt");

static ENGLISH_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();
static KOREAN_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Parse a raw newline-delimited wordlist into a boxed slice.
fn parse_wordlist(raw: &'static str, expected: usize) -> Box<[&'static str]> {
    let words: Vec<&'static str> = raw.lines().filter(|l| !l.is_empty()).collect();
    assert!(
        words.len() == expected,
        "wordlist must contain exactly {expected} words, got {}",
        words.len()
    );
    words.into_boxed_slice()
}

/// Returns the parsed wordlist for the given language.
///
/// The wordlist is parsed lazily on first access and cached for the lifetime
/// of the process.
///
/// # Panics
///
/// Panics if an embedded wordlist does not contain exactly its expected
/// number of words.
#[must_use]
pub fn get_wordlist(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => {
            ENGLISH_LOCK.get_or_init(|| parse_wordlist(ENGLISH_RAW, ENGLISH_WORDLIST_SIZE))
        }
        Language::Korean => {
            KOREAN_LOCK.get_or_init(|| parse_wordlist(KOREAN_RAW, KOREAN_WORDLIST_SIZE))
        }
    }
}
