//! Vault.
//!
//! The primary interface for store operations: a resolved store path plus
//! the mapping loaded from it. Each command opens a vault once, applies at
//! most one change, and saves.
//!
//! There is no locking around the store file. Two processes writing the same
//! store concurrently race, and the last writer wins.

use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::identity::Identity;
use crate::core::locator::{self, Location};
use crate::core::store::Store;
use crate::error::{Result, SecretError};

/// One decrypted entry of a bulk listing.
///
/// Each key carries its own result so a single bad value does not hide the
/// rest.
#[derive(Debug)]
pub struct Entry {
    pub key: String,
    pub value: Result<Zeroizing<String>>,
}

/// The primary interface for kvage store operations.
#[derive(Debug)]
pub struct Vault {
    location: Location,
    store: Store,
}

impl Vault {
    /// Resolve the store path and load it.
    ///
    /// A missing or unparsable store opens empty.
    ///
    /// # Errors
    ///
    /// Returns `IoError::ReadFile` if the store file exists but cannot be read.
    pub fn open(explicit: Option<&Path>) -> Result<Self> {
        Self::at(locator::locate(explicit))
    }

    /// Load the store at an already resolved location.
    pub fn at(location: Location) -> Result<Self> {
        let store = Store::load(&location.path)?;
        Ok(Self { location, store })
    }

    /// Store file path.
    pub fn path(&self) -> &Path {
        &self.location.path
    }

    /// Encrypt `value` for `identity`, store it under `key` and save.
    ///
    /// An existing value for `key` is replaced.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if encryption fails or `IoError` if the store
    /// cannot be written. On error the file on disk is unchanged.
    pub fn set(&mut self, identity: &Identity, key: &str, value: &str) -> Result<()> {
        let encrypted = cipher::encrypt(value, identity.as_age())?;
        let replaced = self.store.contains(key);
        self.store.insert(key, encrypted);
        self.store.save(self.path())?;
        info!(key, replaced, "value stored");
        Ok(())
    }

    /// Decrypt the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::NotFound` if the key is absent or
    /// `CryptoError::DecryptionFailed` if the value cannot be decrypted.
    pub fn get(&self, identity: &Identity, key: &str) -> Result<Zeroizing<String>> {
        let encrypted = self
            .store
            .get(key)
            .ok_or_else(|| SecretError::NotFound(key.to_string()))?;
        cipher::decrypt(encrypted, identity.as_age())
    }

    /// Remove `key` and save.
    ///
    /// Returns `false` without touching the file if the key was absent.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the store cannot be written.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if self.store.remove(key).is_none() {
            debug!(key, "key not present, nothing to remove");
            return Ok(false);
        }
        self.store.save(self.path())?;
        info!(key, "value removed");
        Ok(true)
    }

    /// Decrypt every value whose key contains `filter`, in key order.
    ///
    /// Only the filtered keys are decrypted.
    pub fn entries(&self, identity: &Identity, filter: Option<&str>) -> Vec<Entry> {
        let entries: Vec<Entry> = self
            .store
            .entries(filter)
            .map(|(key, encrypted)| Entry {
                key: key.to_string(),
                value: cipher::decrypt(encrypted, identity.as_age()),
            })
            .collect();
        debug!(
            matched = entries.len(),
            failed = entries.iter().filter(|e| e.value.is_err()).count(),
            "entries decrypted"
        );
        entries
    }
}
