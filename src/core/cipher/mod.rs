//! Per-value encryption.
//!
//! Every stored value is its own age file, encrypted for exactly one
//! recipient: the public half of the local identity. Blobs are ASCII-armored
//! so they can sit inside the YAML store as ordinary string scalars.

use ::age::x25519;
use zeroize::Zeroizing;

use crate::error::Result;

mod age;

pub use age::Age;

/// Cryptographic backend trait.
///
/// Encryption targets a single recipient. There is no recipient set: a value
/// is always encrypted for the identity that will later decrypt it.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for one recipient.
    ///
    /// Output must differ between calls with the same input; every call
    /// uses fresh ephemeral key material.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipient: &Self::Recipient) -> Result<String>;

    /// Decrypt a blob using a private identity.
    ///
    /// Decryption is all-or-nothing: a blob for another recipient, a
    /// truncated blob or one failing its integrity check is an error, never
    /// partial plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::DecryptionFailed` if decryption fails.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<Zeroizing<String>>;
}

/// Encrypt plaintext for the identity's own public key.
///
/// Convenience wrapper around `Age::encrypt`.
///
/// # Errors
///
/// Returns `CryptoError` if encryption fails at any stage.
pub fn encrypt(plaintext: &str, identity: &x25519::Identity) -> Result<String> {
    Age.encrypt(plaintext, &identity.to_public())
}

/// Decrypt an armored age blob with a private identity.
///
/// Convenience wrapper around `Age::decrypt`.
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed` if decryption fails or the key
/// doesn't match.
pub fn decrypt(encrypted: &str, identity: &x25519::Identity) -> Result<Zeroizing<String>> {
    Age.decrypt(encrypted, identity)
}
