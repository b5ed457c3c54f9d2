//! Key commands.
//!
//! Generates a key pair or prints the active public key.

use std::path::PathBuf;

use tracing::info;

use crate::cli::{output, Settings};
use crate::core::identity::Identity;
use crate::error::Result;

/// Generate a new key pair and write its key file.
pub fn generate(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(Identity::default_path);
    let identity = Identity::generate(&path, force)?;
    info!(path = %path.display(), "key pair generated");

    output::success(&format!("key pair saved to {}", output::path(identity.path())));
    output::kv("public key", identity.public_key());
    output::hint(&format!("export AGE_KEY_FILE={}", identity.path().display()));
    Ok(())
}

/// Print the public key of the active identity.
pub fn pubkey(settings: &Settings) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    println!("{}", identity.public_key());
    Ok(())
}
