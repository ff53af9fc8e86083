//! Hangul syllable decomposition and two-set (Dubeolsik) QWERTY remapping.
//!
//! A precomposed Hangul syllable (U+AC00..=U+D7A3) encodes its jamo
//! arithmetically: `code = 0xAC00 + (leading * 21 + vowel) * 28 + trailing`.
//! [`decompose_syllable`] inverts that formula; [`to_qwerty_keystrokes`]
//! maps each jamo onto the keystrokes a two-set Korean QWERTY layout needs
//! to type it (compound trailing clusters expand to two keys, e.g. ㄳ → "rt").

/// First precomposed Hangul syllable.
const SYLLABLE_BASE: u32 = 0xAC00;

/// Last precomposed Hangul syllable.
const SYLLABLE_LAST: u32 = 0xD7A3;

/// Leading consonants (choseong), in Unicode order.
const LEADING: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels (jungseong), in Unicode order.
const VOWEL: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants (jongseong) for indices 1..=27; index 0 means "none".
const TRAILING: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Decompose one character into its jamo sequence.
///
/// A Hangul syllable yields its leading consonant, vowel, and (when present)
/// trailing consonant. Anything outside the syllable block passes through as
/// a single-element sequence.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn decompose_syllable(c: char) -> Vec<char> {
    let code = u32::from(c);
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return vec![c];
    }

    let offset = code - SYLLABLE_BASE;
    let trailing = offset % 28;
    let vowel = (offset / 28) % 21;
    let leading = offset / (28 * 21);

    let mut jamo = vec![LEADING[leading as usize], VOWEL[vowel as usize]];
    if trailing > 0 {
        jamo.push(TRAILING[(trailing - 1) as usize]);
    }
    jamo
}

/// Two-set keyboard keystrokes for a single jamo.
///
/// Returns `None` for characters that are not Korean jamo; callers pass
/// those through unchanged (a fallback, not an expected path for well-formed
/// Hangul).
const fn qwerty_keys(jamo: char) -> Option<&'static str> {
    let keys = match jamo {
        // Consonants.
        'ㄱ' => "r",
        'ㄲ' => "R",
        'ㄴ' => "s",
        'ㄷ' => "e",
        'ㄸ' => "E",
        'ㄹ' => "f",
        'ㅁ' => "a",
        'ㅂ' => "q",
        'ㅃ' => "Q",
        'ㅅ' => "t",
        'ㅆ' => "T",
        'ㅇ' => "d",
        'ㅈ' => "w",
        'ㅉ' => "W",
        'ㅊ' => "c",
        'ㅋ' => "z",
        'ㅌ' => "x",
        'ㅍ' => "v",
        'ㅎ' => "g",
        // Vowels.
        'ㅏ' => "k",
        'ㅐ' => "o",
        'ㅑ' => "i",
        'ㅒ' => "O",
        'ㅓ' => "j",
        'ㅔ' => "p",
        'ㅕ' => "u",
        'ㅖ' => "P",
        'ㅗ' => "h",
        'ㅘ' => "hk",
        'ㅙ' => "ho",
        'ㅚ' => "hl",
        'ㅛ' => "y",
        'ㅜ' => "n",
        'ㅝ' => "nj",
        'ㅞ' => "np",
        'ㅟ' => "nl",
        'ㅠ' => "b",
        'ㅡ' => "m",
        'ㅢ' => "ml",
        'ㅣ' => "l",
        // Compound trailing clusters, typed as two keys.
        'ㄳ' => "rt",
        'ㄵ' => "sw",
        'ㄶ' => "sg",
        'ㄺ' => "fr",
        'ㄻ' => "fa",
        'ㄼ' => "fq",
        'ㄽ' => "ft",
        'ㄾ' => "fx",
        'ㄿ' => "fv",
        'ㅀ' => "fg",
        'ㅄ' => "qt",
        _ => return None,
    };
    Some(keys)
}

/// Remap Hangul text to the QWERTY keystroke sequence that would type it.
///
/// Non-Hangul characters are carried through unchanged.
#[must_use]
pub fn to_qwerty_keystrokes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        for jamo in decompose_syllable(c) {
            match qwerty_keys(jamo) {
                Some(keys) => out.push_str(keys),
                None => out.push(jamo),
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
