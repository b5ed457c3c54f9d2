//! kvage - a personal key-value store with per-value age encryption.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── keys          # generate-key, pubkey
//! │   ├── secrets       # set, get, list, rm, export
//! │   ├── pipe          # encrypt, decrypt (stdin -> stdout)
//! │   ├── location      # where
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── identity      # Key file parsing and generation
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age encryption implementation
//!     ├── locator       # Store file resolution
//!     ├── store/        # YAML store load/save
//!     ├── vault         # Store operations
//!     └── env           # Shell export formatting
//! ```
//!
//! # Features
//!
//! - One age file per value, encrypted for the local x25519 identity
//! - Store resolution: explicit path, working directory, config directory
//! - Atomic store writes
//! - Shell export of selected values

pub mod cli;
pub mod core;
pub mod error;

/// Re-exports for benchmarks.
#[doc(hidden)]
pub mod bench {
    pub use crate::core::cipher::{Age, Cipher};
}
