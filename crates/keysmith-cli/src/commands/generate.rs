//! `password`, `passphrase`, and `pin` subcommands.
//!
//! Flags map onto the core's options records; anything not flagged keeps
//! the record's documented default. Generated values go to stdout only —
//! they are never logged.

use anyhow::{bail, Result};
use keysmith_core::{
    generate_passphrase, generate_password, generate_pin, CaseTransform, Language,
    PassphraseOptions, PasswordOptions, PinOptions,
};

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn password(
    length: usize,
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    special: bool,
    ambiguous: bool,
    min_upper: usize,
    min_lower: usize,
    min_digits: usize,
    min_special: usize,
) -> Result<()> {
    let options = PasswordOptions {
        length,
        uppercase,
        lowercase,
        digits,
        special,
        ambiguous,
        min_uppercase: min_upper,
        min_lowercase: min_lower,
        min_digits,
        min_special,
    };
    log::debug!("resolved password options: {options:?}");

    println!("{}", generate_password(&options)?);
    Ok(())
}

fn parse_language(language: &str) -> Result<Language> {
    match language {
        "english" => Ok(Language::English),
        "korean" => Ok(Language::Korean),
        other => bail!("unknown language: '{other}' (expected english or korean)"),
    }
}

fn parse_transform(transform: &str) -> Result<CaseTransform> {
    match transform {
        "lowercase" => Ok(CaseTransform::Lowercase),
        "uppercase" => Ok(CaseTransform::Uppercase),
        "titlecase" => Ok(CaseTransform::Titlecase),
        other => bail!("unknown transform: '{other}'"),
    }
}

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn passphrase(
    words: usize,
    sep: &str,
    capitalize: bool,
    include_digit: bool,
    language: &str,
    qwerty: bool,
    transform: Option<&str>,
    leet: bool,
) -> Result<()> {
    let options = PassphraseOptions {
        word_count: words,
        separator: sep.to_string(),
        capitalize,
        include_digit,
        language: parse_language(language)?,
        qwerty_convert: qwerty,
        case_transform: transform.map(parse_transform).transpose()?,
        leet,
    };
    log::debug!("resolved passphrase options: {options:?}");

    println!("{}", generate_passphrase(&options)?);
    Ok(())
}

pub fn pin(length: usize, allow_sequential: bool, allow_repeated: bool) -> Result<()> {
    let options = PinOptions {
        length,
        allow_sequential,
        allow_repeated,
    };
    log::debug!("resolved PIN options: {options:?}");

    println!("{}", generate_pin(&options)?);
    Ok(())
}
