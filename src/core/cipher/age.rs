//! Age encryption backend implementation.
//!
//! Provides encryption/decryption using the age format with x25519 keys
//! and ASCII armor encoding.

use std::io::{Read, Write};

use ::age::x25519;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{CryptoError, Result};

/// Age-based cryptographic backend using x25519 keys
pub struct Age;

impl Cipher for Age {
    type Recipient = x25519::Recipient;
    type Identity = x25519::Identity;

    fn encrypt(&self, plaintext: &str, recipient: &x25519::Recipient) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(recipient as &dyn age::Recipient))
                .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut encrypted = Vec::new();
        let armor = age::armor::ArmoredWriter::wrap_output(
            &mut encrypted,
            age::armor::Format::AsciiArmor,
        )
        .map_err(|e| CryptoError::ArmorFailed(e.to_string()))?;
        let mut writer = encryptor
            .wrap_output(armor)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        writer
            .write_all(plaintext.as_bytes())
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        let armor = writer
            .finish()
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        armor
            .finish()
            .map_err(|e| CryptoError::ArmorFailed(e.to_string()))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        String::from_utf8(encrypted)
            .map_err(|e| CryptoError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }

    fn decrypt(&self, encrypted: &str, identity: &x25519::Identity) -> Result<Zeroizing<String>> {
        trace!(ciphertext_len = encrypted.len(), "decrypting");

        let reader = age::armor::ArmoredReader::new(encrypted.as_bytes());
        let decryptor = age::Decryptor::new(reader)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

        let mut reader = decryptor
            .decrypt(std::iter::once(identity as &dyn age::Identity))
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

        // The payload is authenticated chunk by chunk; a failure anywhere
        // discards everything read so far.
        let mut decrypted = Zeroizing::new(Vec::new());
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        let text = std::str::from_utf8(&decrypted)
            .map_err(|e| CryptoError::DecryptionFailed(format!("UTF-8 error: {}", e)))?;
        Ok(Zeroizing::new(text.to_owned()))
    }
}
