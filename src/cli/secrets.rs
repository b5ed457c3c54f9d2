//! Store commands.
//!
//! Implements set, get, list, rm and export. Each handler loads the identity
//! (when it needs one) and the store exactly once.

use std::collections::BTreeMap;

use serde::Serialize;
use zeroize::Zeroizing;

use crate::cli::{output, Settings};
use crate::core::env::Exports;
use crate::core::identity::Identity;
use crate::core::vault::Vault;
use crate::error::{IoError, Result};

/// `list --json` document.
#[derive(Serialize)]
struct JsonListing<'a> {
    values: BTreeMap<&'a str, &'a str>,
    errors: BTreeMap<&'a str, String>,
}

/// Encrypt and store a value.
pub fn set(settings: &Settings, key: &str, value: &str) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let mut vault = Vault::open(settings.store_file.as_deref())?;
    vault.set(&identity, key, value)?;
    output::success(&format!("set {}", output::key(key)));
    Ok(())
}

/// Print a decrypted value.
pub fn get(settings: &Settings, key: &str) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let vault = Vault::open(settings.store_file.as_deref())?;
    let value = vault.get(&identity, key)?;
    // Plain output for scripting - no decoration
    println!("{}", value.as_str());
    Ok(())
}

/// Print `key: value` for every matching key, in key order.
///
/// A value that fails to decrypt is reported in place and the listing
/// continues.
pub fn list(settings: &Settings, filter: Option<&str>, json: bool) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let vault = Vault::open(settings.store_file.as_deref())?;
    let entries = vault.entries(&identity, filter);

    if json {
        // Borrow plaintext from the zeroizing entries; only the rendered
        // document holds a copy.
        let mut values = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for entry in &entries {
            match &entry.value {
                Ok(value) => {
                    values.insert(entry.key.as_str(), value.as_str());
                }
                Err(e) => {
                    errors.insert(entry.key.as_str(), e.to_string());
                }
            }
        }
        let listing = JsonListing { values, errors };
        let rendered = Zeroizing::new(
            serde_json::to_string_pretty(&listing).map_err(|e| IoError::Stdout(e.into()))?,
        );
        println!("{}", rendered.as_str());
        return Ok(());
    }

    if entries.is_empty() {
        output::dimmed(if filter.is_some() {
            "no matching keys"
        } else {
            "no values stored"
        });
        return Ok(());
    }

    for entry in &entries {
        match &entry.value {
            Ok(value) => println!("{}: {}", entry.key, value.as_str()),
            Err(e) => println!("{}: <error decrypting: {}>", entry.key, e),
        }
    }
    Ok(())
}

/// Remove a key.
///
/// Removing an absent key is not an error; the store file is left untouched.
pub fn rm(settings: &Settings, key: &str) -> Result<()> {
    let mut vault = Vault::open(settings.store_file.as_deref())?;
    if vault.remove(key)? {
        output::success(&format!("removed {}", output::key(key)));
    } else {
        output::warn(&format!("key '{}' not found, nothing removed", key));
    }
    Ok(())
}

/// Print matching values as `export KEY="value"` lines.
///
/// Values that fail to decrypt are reported on stderr and skipped.
pub fn export(settings: &Settings, filter: Option<&str>) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let vault = Vault::open(settings.store_file.as_deref())?;

    let mut exports = Exports::new();
    for entry in vault.entries(&identity, filter) {
        match entry.value {
            Ok(value) => exports.push(&entry.key, value),
            Err(e) => output::warn(&format!("skipping {}: {}", entry.key, e)),
        }
    }

    print!("{}", exports.render().as_str());
    Ok(())
}
