//! `encrypt` and `decrypt` subcommands.

use anyhow::Result;
use keysmith_core::EnvelopeOptions;

fn options(salt_len: usize, iterations: u32) -> EnvelopeOptions {
    EnvelopeOptions {
        salt_len,
        iterations,
        ..EnvelopeOptions::default()
    }
}

pub fn encrypt(text: &str, secret: &str, salt_len: usize, iterations: u32) -> Result<()> {
    log::debug!("encrypting with salt_len={salt_len} iterations={iterations}");
    let sealed = keysmith_core::encrypt(text, secret, &options(salt_len, iterations))?;
    println!("{sealed}");
    Ok(())
}

pub fn decrypt(envelope: &str, secret: &str, salt_len: usize, iterations: u32) -> Result<()> {
    log::debug!("decrypting with salt_len={salt_len} iterations={iterations}");
    let opened = keysmith_core::decrypt(envelope, secret, &options(salt_len, iterations))?;
    println!("{opened}");
    Ok(())
}
