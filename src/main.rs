//! kvage - a personal key-value store with per-value age encryption.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kvage::cli::output;
use kvage::cli::{execute, Cli, Settings};
use kvage::core::constants;
use kvage::error::{ConfigError, Error, FormatError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kvage=debug")
        } else {
            EnvFilter::new("kvage=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = Settings::from(&cli);
    if let Err(e) = execute(cli.command, &settings) {
        let suggestion = match &e {
            Error::Config(ConfigError::NoKeyFile) => {
                Some("run: kvage generate-key, then export AGE_KEY_FILE=keys/key.txt")
            }
            Error::Format(FormatError::InvalidKeyFile { .. }) => {
                Some("key files start with two comment lines followed by the secret key")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
