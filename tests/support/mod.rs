//! Test support utilities for kvage integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and home directory. No
/// process-global state is mutated: child processes get `.current_dir()`
/// and explicit environment variables, so tests can run in parallel.
pub struct Test {
    /// Working directory for the child process
    pub dir: TempDir,
    /// Home directory (config root lives under it)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        Self { dir, home }
    }

    /// Create a test environment with a generated key at `keys/key.txt`.
    pub fn with_key() -> Self {
        let t = Self::new();
        let output = t.generate_key();
        assert!(
            output.status.success(),
            "Failed to generate key: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with a key and the given values stored.
    pub fn with_values(values: &[(&str, &str)]) -> Self {
        let t = Self::with_key();
        for (k, v) in values {
            let output = t.set(k, v);
            assert!(
                output.status.success(),
                "Failed to set {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the generated key file.
    pub fn key_path(&self) -> PathBuf {
        self.dir.path().join("keys").join("key.txt")
    }

    /// Per-user config root used by the child process.
    pub fn config_root(&self) -> PathBuf {
        self.home.path().join(".config")
    }

    /// Store path the child resolves to when nothing else matches.
    ///
    /// Follows the platform conventions of `dirs::config_dir`.
    pub fn default_store_path(&self) -> PathBuf {
        let root = if cfg!(target_os = "macos") {
            self.home.path().join("Library").join("Application Support")
        } else {
            self.config_root()
        };
        root.join("kvage").join("kvage.yaml")
    }

    /// Path of a store file in the working directory.
    pub fn local_store_path(&self) -> PathBuf {
        self.dir.path().join("kvage.yaml")
    }
}
