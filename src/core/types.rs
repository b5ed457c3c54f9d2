//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A key in the store (e.g., db_pass).
pub type SecretKey = String;

/// An encrypted value (age-armored ciphertext).
///
/// Contains the age-encrypted and ASCII-armored representation of a value.
pub type EncryptedValue = String;

/// An age public key string (starts with "age1...").
pub type PublicKey = String;
