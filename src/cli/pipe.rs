//! Encrypt and decrypt commands.
//!
//! Stream stdin to stdout through the value cipher. The store is not touched.

use std::io::{self, Read, Write};

use zeroize::Zeroizing;

use crate::cli::Settings;
use crate::core::cipher;
use crate::core::identity::Identity;
use crate::error::{IoError, Result};

/// Encrypt stdin for the active identity and print the armored blob.
pub fn encrypt(settings: &Settings) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let plaintext = read_stdin()?;
    let encrypted = cipher::encrypt(&plaintext, identity.as_age())?;
    write_stdout(encrypted.as_bytes())
}

/// Decrypt an armored blob from stdin and print the plaintext as-is.
pub fn decrypt(settings: &Settings) -> Result<()> {
    let identity = Identity::open(settings.key_file.as_deref())?;
    let encrypted = read_stdin()?;
    let plaintext = cipher::decrypt(&encrypted, identity.as_age())?;
    write_stdout(plaintext.as_bytes())
}

fn read_stdin() -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    io::stdin()
        .read_to_string(&mut input)
        .map_err(IoError::Stdin)?;
    Ok(input)
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes).map_err(IoError::Stdout)?;
    stdout.flush().map_err(IoError::Stdout)?;
    Ok(())
}
