//! Password-sealed text envelope — PBKDF2 key derivation + AES-256-GCM.
//!
//! Wire format: `base64(salt ‖ iv ‖ ciphertext ‖ tag)`. The 128-bit
//! authentication tag is appended by the cipher; salt and IV travel in the
//! clear, the secret never does. Decryption must use the exact salt length,
//! IV length, and iteration count used at encryption time — any mismatch
//! surfaces as [`CoreError::Decryption`], never as silent corruption.

use std::num::NonZeroU32;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ring::{aead, pbkdf2};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::error::CoreError;
use crate::random::fill_random;

/// AES-256 key length in bytes.
const KEY_LEN: usize = 32;

/// AES-256-GCM authentication tag length in bytes (128 bits).
const TAG_LEN: usize = 16;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Default IV length in bytes — the AES-GCM 96-bit nonce.
pub const DEFAULT_IV_LEN: usize = 12;

/// Default PBKDF2-HMAC-SHA256 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`encrypt`] / [`decrypt`].
///
/// Deserializing a partial configuration merges the supplied fields over
/// [`EnvelopeOptions::default`]; unset fields never override the defaults.
/// Decryption requires the same values used at encryption time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeOptions {
    /// Salt length in bytes.
    pub salt_len: usize,
    /// IV length in bytes. AES-256-GCM accepts only the 96-bit nonce here;
    /// any other value fails at encrypt time and reads as a decryption
    /// failure at decrypt time.
    pub iv_len: usize,
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            salt_len: DEFAULT_SALT_LEN,
            iv_len: DEFAULT_IV_LEN,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

/// Derive a 256-bit AES key from the secret via PBKDF2-HMAC-SHA256.
fn derive_key(
    secret: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<Zeroizing<[u8; KEY_LEN]>, CoreError> {
    let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
        CoreError::InvalidArgument("iteration count must be at least 1".to_string())
    })?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        salt,
        secret.as_bytes(),
        key.as_mut_slice(),
    );
    Ok(key)
}

fn sealing_key(key: &[u8; KEY_LEN]) -> Result<aead::LessSafeKey, CoreError> {
    let unbound = aead::UnboundKey::new(&aead::AES_256_GCM, key)
        .map_err(|_| CoreError::Encryption("failed to create AES-256-GCM key".to_string()))?;
    Ok(aead::LessSafeKey::new(unbound))
}

// ---------------------------------------------------------------------------
// Encrypt / decrypt
// ---------------------------------------------------------------------------

/// Encrypt `plaintext` under a key derived from `secret`.
///
/// A fresh random salt and IV are drawn per call, so encrypting the same
/// input twice yields different envelopes.
///
/// # Errors
///
/// Returns [`CoreError::Encryption`] for an unsupported IV length or cipher
/// failure, [`CoreError::InvalidArgument`] for a zero iteration count, and
/// [`CoreError::Unavailable`] if the platform randomness source fails.
pub fn encrypt(
    plaintext: &str,
    secret: &str,
    options: &EnvelopeOptions,
) -> Result<String, CoreError> {
    if options.iv_len != aead::NONCE_LEN {
        return Err(CoreError::Encryption(format!(
            "unsupported IV length: {} bytes (AES-256-GCM requires {})",
            options.iv_len,
            aead::NONCE_LEN
        )));
    }

    let mut salt = vec![0u8; options.salt_len];
    fill_random(&mut salt)?;
    let mut iv = [0u8; aead::NONCE_LEN];
    fill_random(&mut iv)?;

    let key = derive_key(secret, &salt, options.iterations)?;
    let sealing = sealing_key(&key)?;
    let nonce = aead::Nonce::assume_unique_for_key(iv);

    let mut in_out = plaintext.as_bytes().to_vec();
    if sealing
        .seal_in_place_append_tag(nonce, aead::Aad::empty(), &mut in_out)
        .is_err()
    {
        in_out.zeroize();
        return Err(CoreError::Encryption(
            "AES-256-GCM encryption failed".to_string(),
        ));
    }

    let mut framed =
        Vec::with_capacity(salt.len().saturating_add(iv.len()).saturating_add(in_out.len()));
    framed.extend_from_slice(&salt);
    framed.extend_from_slice(&iv);
    framed.extend_from_slice(&in_out);

    Ok(BASE64.encode(&framed))
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`CoreError::Decryption`] for a malformed envelope, a wrong
/// secret, tampered data, or mismatched salt/IV/iteration options, and
/// [`CoreError::InvalidArgument`] for a zero iteration count.
pub fn decrypt(
    envelope: &str,
    secret: &str,
    options: &EnvelopeOptions,
) -> Result<String, CoreError> {
    if options.iv_len != aead::NONCE_LEN {
        return Err(CoreError::Decryption);
    }

    let framed = BASE64.decode(envelope).map_err(|_| CoreError::Decryption)?;

    let header_len = options.salt_len.saturating_add(options.iv_len);
    if framed.len() < header_len.saturating_add(TAG_LEN) {
        return Err(CoreError::Decryption);
    }

    let (salt, rest) = framed.split_at(options.salt_len);
    let (iv, ciphertext) = rest.split_at(options.iv_len);

    let key = derive_key(secret, salt, options.iterations)?;
    let opening = sealing_key(&key)?;
    let nonce = aead::Nonce::try_assume_unique_for_key(iv).map_err(|_| CoreError::Decryption)?;

    let mut in_out = ciphertext.to_vec();
    let plaintext = opening
        .open_in_place(nonce, aead::Aad::empty(), &mut in_out)
        .map_err(|_| CoreError::Decryption)?;

    let text = String::from_utf8(plaintext.to_vec()).map_err(|_| CoreError::Decryption)?;
    in_out.zeroize();
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
