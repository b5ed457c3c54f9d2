//! Error types.
//!
//! A single top-level [`Error`] wraps one enum per failure domain so callers
//! can match on the kind of failure without string inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all kvage operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error("key file already exists: {} (use --force to overwrite)", .0.display())]
    KeyFileExists(PathBuf),
}

/// No usable configuration could be resolved.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no key file specified: use --key or set AGE_KEY_FILE")]
    NoKeyFile,
}

/// A file exists but does not have the expected layout.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid key file format: {} has {lines} line(s), expected at least 3", path.display())]
    InvalidKeyFile { path: PathBuf, lines: usize },
}

/// Key parsing, encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("failed to parse private key: {0}")]
    InvalidPrivateKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor failed: {0}")]
    ArmorFailed(String),
}

/// Filesystem and stream failures.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("failed to write stdout: {0}")]
    Stdout(std::io::Error),
}

/// Lookups against the key-value store.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("key '{0}' not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
