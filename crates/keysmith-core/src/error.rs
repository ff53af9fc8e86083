//! Error types for `keysmith-core`.

use thiserror::Error;

/// Errors produced by credential generation and analysis.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or out-of-domain input (sampler bound, PIN length).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A builder configuration cannot be resolved (e.g. empty wordlist).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A bounded retry policy ran out of attempts.
    #[error("attempt limit exhausted: {0}")]
    Exhausted(String),

    /// No cryptographically secure randomness source is available.
    /// Propagates as-is — there is no fallback to a weaker source.
    #[error("secure randomness unavailable: {0}")]
    Unavailable(String),

    /// Envelope encryption failure (key derivation, cipher setup).
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Envelope authentication failed — ciphertext tampered, wrong secret,
    /// or mismatched salt/IV/iteration parameters.
    #[error("decryption failed: authentication tag mismatch or malformed envelope")]
    Decryption,
}
