#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the credential builders.

use proptest::prelude::*;
use keysmith_core::{
    calculate_strength, generate_passphrase, generate_password, generate_pin, Language,
    PassphraseOptions, PasswordOptions, PinOptions,
};

const AMBIGUOUS_GLYPHS: &[char] = &['I', 'l', '1', '0', 'O', 'i', 'L', 'o'];

/// Strategy over full password option records.
fn password_options_strategy() -> impl Strategy<Value = PasswordOptions> {
    (
        0usize..48,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(length, uppercase, lowercase, digits, special, ambiguous)| PasswordOptions {
                length,
                uppercase,
                lowercase,
                digits,
                special,
                ambiguous,
                min_uppercase: usize::from(uppercase),
                min_lowercase: usize::from(lowercase),
                min_digits: usize::from(digits),
                min_special: usize::from(special),
            },
        )
}

proptest! {
    /// Output length is `max(length, sum of enabled minimums)`, every enabled
    /// class is represented, and ambiguous glyphs respect the toggle.
    #[test]
    fn password_satisfies_constraints(options in password_options_strategy()) {
        let pw = generate_password(&options).unwrap();

        let min_sum = options.min_uppercase
            + options.min_lowercase
            + options.min_digits
            + options.min_special;
        prop_assert_eq!(pw.len(), options.length.max(min_sum));

        if options.uppercase {
            prop_assert!(pw.chars().any(|c| c.is_ascii_uppercase()), "no upper: {}", pw);
        }
        if options.lowercase {
            prop_assert!(pw.chars().any(|c| c.is_ascii_lowercase()), "no lower: {}", pw);
        }
        if options.digits {
            prop_assert!(pw.chars().any(|c| c.is_ascii_digit()), "no digit: {}", pw);
        }
        if options.special {
            prop_assert!(pw.chars().any(|c| !c.is_ascii_alphanumeric()), "no special: {}", pw);
        }
        if !options.ambiguous {
            prop_assert!(
                !pw.chars().any(|c| AMBIGUOUS_GLYPHS.contains(&c)),
                "ambiguous glyph in: {}", pw
            );
        }
    }

    /// The passphrase word count survives every transform combination.
    #[test]
    fn passphrase_word_count_is_stable(
        word_count in 1usize..9,
        capitalize in any::<bool>(),
        include_digit in any::<bool>(),
        leet in any::<bool>(),
        korean in any::<bool>(),
        qwerty_convert in any::<bool>(),
    ) {
        let options = PassphraseOptions {
            word_count,
            capitalize,
            include_digit,
            leet,
            language: if korean { Language::Korean } else { Language::English },
            qwerty_convert,
            ..PassphraseOptions::default()
        };
        let pp = generate_passphrase(&options).unwrap();
        prop_assert_eq!(pp.split('-').count(), word_count);
    }

    /// Plain English output is letters-only per word.
    #[test]
    fn plain_passphrase_is_letters_only(word_count in 1usize..8) {
        let options = PassphraseOptions {
            word_count,
            capitalize: false,
            include_digit: false,
            ..PassphraseOptions::default()
        };
        let pp = generate_passphrase(&options).unwrap();
        for word in pp.split('-') {
            prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()), "word: {}", word);
        }
    }

    /// PINs of any realistic length honor both rejection constraints.
    #[test]
    fn pin_honors_constraints(length in 2usize..10) {
        let pin = generate_pin(&PinOptions { length, ..PinOptions::default() }).unwrap();
        prop_assert_eq!(pin.len(), length);
        prop_assert!(pin.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(!"0123456789".contains(&pin));
        prop_assert!(!"9876543210".contains(&pin));
        let first = pin.chars().next().unwrap();
        prop_assert!(!pin.chars().all(|c| c == first));
    }

    /// Strength scoring never leaves its bounds, for any input, and the
    /// label/color pair always matches the score tier.
    #[test]
    fn strength_score_is_bounded(password in ".*") {
        let report = calculate_strength(&password);
        prop_assert!(report.score <= 4);
        let labels = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];
        let colors = ["red", "orange", "yellow", "lime", "green"];
        prop_assert_eq!(report.label, labels[report.score as usize]);
        prop_assert_eq!(report.color, colors[report.score as usize]);
    }

    /// Generated passwords at default settings never score below Fair.
    #[test]
    fn generated_passwords_score_reasonably(_dummy in 0u8..4) {
        let pw = generate_password(&PasswordOptions::default()).unwrap();
        let report = calculate_strength(&pw);
        prop_assert!(report.score >= 2, "weak generated password {} -> {}", pw, report.score);
    }
}
