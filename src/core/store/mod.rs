//! Key-value store persistence.
//!
//! The store is a YAML document with a single top-level `data` mapping from
//! key to armored age blob:
//!
//! ```yaml
//! data:
//!   db_pass: |
//!     -----BEGIN AGE ENCRYPTED FILE-----
//!     ...
//!     -----END AGE ENCRYPTED FILE-----
//! ```
//!
//! Values are ciphertext only; nothing in this module ever sees plaintext.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{EncryptedValue, SecretKey};
use crate::error::{IoError, Result};

mod fs;

/// On-disk layout. `data: ~` and a missing `data` both mean empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    data: Option<BTreeMap<SecretKey, EncryptedValue>>,
}

/// In-memory key-value mapping of encrypted values.
///
/// Keys are unique and iterate in lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Store {
    data: BTreeMap<SecretKey, EncryptedValue>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store at `path`.
    ///
    /// A missing file yields an empty store. So does a file that exists but
    /// does not parse: the failure is logged as a warning and the caller
    /// proceeds as if no values were stored. A later save will replace the
    /// unparsable file.
    ///
    /// # Errors
    ///
    /// Returns `IoError::ReadFile` if the file exists but cannot be read.
    /// Saving over a store that could not be read would discard its values.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading store");

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("store file not found, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(IoError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                }
                .into())
            }
        };

        match Self::parse(&contents) {
            Ok(store) => {
                debug!(keys = store.len(), "store loaded");
                Ok(store)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot parse store, treating as empty");
                Ok(Self::new())
            }
        }
    }

    /// Parse a YAML document. Blank input is an empty store.
    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        let file: StoreFile = serde_yaml::from_str(contents)?;
        Ok(Self {
            data: file.data.unwrap_or_default(),
        })
    }

    /// Serialize to a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        let file = StoreFile {
            data: Some(self.data.clone()),
        };
        Ok(serde_yaml::to_string(&file).map_err(IoError::Serialize)?)
    }

    /// Write the store to `path`, creating parent directories as needed.
    ///
    /// The document is written to a temporary file in the same directory and
    /// renamed over `path`, so a failed write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if serialization, directory creation, the write
    /// or the final rename fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), keys = self.len(), "saving store");
        let contents = self.to_yaml()?;
        fs::write_atomic(path, contents.as_bytes())
    }

    /// Encrypted value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Insert or replace the encrypted value for `key`.
    pub fn insert(&mut self, key: impl Into<SecretKey>, value: EncryptedValue) {
        self.data.insert(key.into(), value);
    }

    /// Remove `key`, returning its encrypted value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<EncryptedValue> {
        self.data.remove(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Sorted `(key, encrypted value)` pairs whose key contains `filter`.
    pub fn entries<'a>(&'a self, filter: Option<&'a str>) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.data
            .iter()
            .filter(move |(key, _)| filter.map_or(true, |f| key.contains(f)))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
