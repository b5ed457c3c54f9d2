//! Command-line interface.
//!
//! The [`Command`] enum is the command table: clap builds it once from the
//! arguments and [`execute`] dispatches on it. Global flags are carried to
//! handlers in an explicit [`Settings`] value.

pub mod completions;
pub mod keys;
pub mod location;
pub mod output;
pub mod pipe;
pub mod secrets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// kvage - a personal key-value store with per-value age encryption.
#[derive(Parser, Debug)]
#[command(
    name = "kvage",
    about = "A personal key-value store with per-value age encryption",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the age key file (falls back to AGE_KEY_FILE)
    #[arg(
        short = 'k',
        long = "key",
        id = "key_file",
        global = true,
        value_name = "PATH"
    )]
    pub key_file: Option<PathBuf>,

    /// Path to the YAML store file
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "KVAGE_FILE",
        value_name = "PATH"
    )]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Per-invocation settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Explicit key file path; `None` defers to `AGE_KEY_FILE`.
    pub key_file: Option<PathBuf>,
    /// Explicit store path; `None` defers to store resolution.
    pub store_file: Option<PathBuf>,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            key_file: cli.key_file.clone(),
            store_file: cli.file.clone(),
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new age key pair (written to keys/key.txt)
    GenerateKey {
        /// Where to write the key file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Overwrite an existing key file
        #[arg(long)]
        force: bool,
    },

    /// Print the public key of the active identity
    Pubkey,

    /// Save an encrypted key-value pair
    Set {
        /// Key name
        key: String,
        /// Plaintext value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Retrieve and decrypt a value by key
    Get {
        /// Key name
        key: String,
    },

    /// List all keys with their decrypted values
    List {
        /// Only keys containing this substring
        #[arg(long, value_name = "SUBSTR")]
        filter: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a key
    Rm {
        /// Key name
        key: String,
    },

    /// Print values as shell export statements
    Export {
        /// Only keys containing this substring
        #[arg(long, value_name = "SUBSTR")]
        filter: Option<String>,
    },

    /// Encrypt stdin and print the armored ciphertext
    Encrypt,

    /// Decrypt an armored ciphertext from stdin
    Decrypt,

    /// Print the resolved store file path
    Where,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command, settings: &Settings) -> Result<()> {
    use Command::*;

    match command {
        GenerateKey { output, force } => keys::generate(output, force),
        Pubkey => keys::pubkey(settings),
        Set { key, value } => secrets::set(settings, &key, &value),
        Get { key } => secrets::get(settings, &key),
        List { filter, json } => secrets::list(settings, filter.as_deref(), json),
        Rm { key } => secrets::rm(settings, &key),
        Export { filter } => secrets::export(settings, filter.as_deref()),
        Encrypt => pipe::encrypt(settings),
        Decrypt => pipe::decrypt(settings),
        Where => location::execute(settings),
        Completions { shell } => completions::execute(shell),
    }
}
