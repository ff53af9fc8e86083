//! CLI for Keysmith — passwords, passphrases, PINs, strength checks, and
//! password-sealed envelopes.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keysmith")]
#[command(about = "keysmith — generate credentials and gauge their strength")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random character password
    Password {
        /// Password length
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// Exclude uppercase letters
        #[arg(long = "no-upper", action = clap::ArgAction::SetFalse)]
        uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long = "no-lower", action = clap::ArgAction::SetFalse)]
        lowercase: bool,

        /// Exclude digits
        #[arg(long = "no-digits", action = clap::ArgAction::SetFalse)]
        digits: bool,

        /// Exclude special characters
        #[arg(long = "no-special", action = clap::ArgAction::SetFalse)]
        special: bool,

        /// Include ambiguous characters (I, l, 1, 0, O)
        #[arg(short, long)]
        ambiguous: bool,

        /// Minimum uppercase characters
        #[arg(long, default_value_t = 1)]
        min_upper: usize,

        /// Minimum lowercase characters
        #[arg(long, default_value_t = 1)]
        min_lower: usize,

        /// Minimum digits
        #[arg(long, default_value_t = 1)]
        min_digits: usize,

        /// Minimum special characters
        #[arg(long, default_value_t = 1)]
        min_special: usize,
    },

    /// Generate a memorable word-based passphrase
    Passphrase {
        /// Number of words
        #[arg(short, long, default_value_t = 4)]
        words: usize,

        /// Separator between words
        #[arg(short, long, default_value = "-")]
        sep: String,

        /// Don't capitalize words
        #[arg(long = "no-caps", action = clap::ArgAction::SetFalse)]
        capitalize: bool,

        /// Don't append a digit to a random word
        #[arg(long = "no-digit", action = clap::ArgAction::SetFalse)]
        include_digit: bool,

        /// Wordlist language
        #[arg(long, default_value = "english", value_parser = ["english", "korean"])]
        language: String,

        /// Korean only: convert Hangul words to QWERTY keystrokes
        #[arg(long)]
        qwerty: bool,

        /// Case transform applied to every word
        #[arg(long, value_parser = ["lowercase", "uppercase", "titlecase"])]
        transform: Option<String>,

        /// Apply leet substitution (a -> 4, e -> 3, ...)
        #[arg(long)]
        leet: bool,
    },

    /// Generate a numeric PIN
    Pin {
        /// Number of digits
        #[arg(short, long, default_value_t = 4)]
        length: usize,

        /// Permit ascending/descending digit runs
        #[arg(long)]
        allow_sequential: bool,

        /// Permit all-same-digit PINs
        #[arg(long)]
        allow_repeated: bool,
    },

    /// Score a password's strength
    Strength {
        /// The password to analyze
        password: String,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt text under a secret-derived key
    Encrypt {
        /// Text to encrypt
        text: String,

        /// Secret the key is derived from
        #[arg(short = 'k', long)]
        secret: String,

        /// Salt length in bytes
        #[arg(long, default_value_t = 16)]
        salt_len: usize,

        /// PBKDF2 iteration count
        #[arg(long, default_value_t = 600_000)]
        iterations: u32,
    },

    /// Decrypt an envelope produced by `encrypt`
    Decrypt {
        /// Base64 envelope to decrypt
        envelope: String,

        /// Secret used at encryption time
        #[arg(short = 'k', long)]
        secret: String,

        /// Salt length used at encryption time
        #[arg(long, default_value_t = 16)]
        salt_len: usize,

        /// Iteration count used at encryption time
        #[arg(long, default_value_t = 600_000)]
        iterations: u32,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Password {
            length,
            uppercase,
            lowercase,
            digits,
            special,
            ambiguous,
            min_upper,
            min_lower,
            min_digits,
            min_special,
        } => commands::generate::password(
            length,
            uppercase,
            lowercase,
            digits,
            special,
            ambiguous,
            min_upper,
            min_lower,
            min_digits,
            min_special,
        ),
        Commands::Passphrase {
            words,
            sep,
            capitalize,
            include_digit,
            language,
            qwerty,
            transform,
            leet,
        } => commands::generate::passphrase(
            words,
            &sep,
            capitalize,
            include_digit,
            &language,
            qwerty,
            transform.as_deref(),
            leet,
        ),
        Commands::Pin {
            length,
            allow_sequential,
            allow_repeated,
        } => commands::generate::pin(length, allow_sequential, allow_repeated),
        Commands::Strength { password, json } => commands::strength::run(&password, json),
        Commands::Encrypt {
            text,
            secret,
            salt_len,
            iterations,
        } => commands::envelope::encrypt(&text, &secret, salt_len, iterations),
        Commands::Decrypt {
            envelope,
            secret,
            salt_len,
            iterations,
        } => commands::envelope::decrypt(&envelope, &secret, salt_len, iterations),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
