//! Constants used throughout kvage.
//!
//! Centralizes file names, environment variables and on-disk markers.

/// Store file name, looked up in the working directory and the config root.
pub const STORE_FILE: &str = "kvage.yaml";

/// Application directory name under the OS configuration root.
pub const APP_DIR: &str = "kvage";

/// Configuration root used when no per-user config directory is known.
pub const FALLBACK_CONFIG_ROOT: &str = "/etc";

/// Directory `generate-key` writes into, relative to the working directory.
pub const KEY_DIR: &str = "keys";

/// Key file name inside [`KEY_DIR`].
pub const KEY_FILE: &str = "key.txt";

/// Environment variable naming the key file.
pub const KEY_FILE_ENV: &str = "AGE_KEY_FILE";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "KVAGE_LOG";

/// Comment prefix of the key file's first line.
pub const CREATED_PREFIX: &str = "# created: ";

/// Comment prefix of the key file's second line.
pub const PUBLIC_KEY_PREFIX: &str = "# public key: ";

/// Unix permissions for the key directory.
#[cfg(unix)]
pub const KEY_DIR_MODE: u32 = 0o700;

/// Unix permissions for the key file.
#[cfg(unix)]
pub const KEY_FILE_MODE: u32 = 0o600;
