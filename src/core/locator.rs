//! Store file resolution.
//!
//! Decides which file backs the key-value store. Precedence, first match
//! wins:
//!
//! 1. an explicit path for this invocation (`--file` / `KVAGE_FILE`)
//! 2. `kvage.yaml` in the working directory, if it exists
//! 3. `kvage.yaml` under the per-user configuration directory
//!
//! Resolution only checks for existence. Directories are created when the
//! store is saved, never here.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;

/// Where a resolved store path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Explicit,
    WorkingDir,
    ConfigDir,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Source::Explicit => "explicit",
            Source::WorkingDir => "working directory",
            Source::ConfigDir => "config directory",
        };
        f.write_str(label)
    }
}

/// A resolved store path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub source: Source,
}

/// Resolves the store path against a working directory and config root.
///
/// Holds no cached answer: every call re-checks the filesystem.
#[derive(Debug, Clone)]
pub struct Locator {
    working_dir: PathBuf,
    config_root: PathBuf,
}

impl Locator {
    /// Locator for the current process: relative working directory and the
    /// OS configuration directory.
    pub fn system() -> Self {
        Self::new(PathBuf::new(), config_root())
    }

    /// Locator with explicit roots.
    pub fn new(working_dir: impl Into<PathBuf>, config_root: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            config_root: config_root.into(),
        }
    }

    /// Resolve the store path.
    pub fn resolve(&self, explicit: Option<&Path>) -> Location {
        let location = if let Some(path) = explicit {
            Location {
                path: path.to_path_buf(),
                source: Source::Explicit,
            }
        } else {
            let local = self.working_dir.join(constants::STORE_FILE);
            if local.is_file() {
                Location {
                    path: local,
                    source: Source::WorkingDir,
                }
            } else {
                Location {
                    path: self.config_root.join(constants::STORE_FILE),
                    source: Source::ConfigDir,
                }
            }
        };

        debug!(path = %location.path.display(), source = %location.source, "store resolved");
        location
    }
}

/// Per-user configuration directory for kvage.
///
/// `~/.config/kvage` on Linux, `~/Library/Application Support/kvage` on
/// macOS, `%APPDATA%\kvage` on Windows, `/etc/kvage` if none is known.
pub fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(constants::FALLBACK_CONFIG_ROOT))
        .join(constants::APP_DIR)
}

/// Resolve the store path for the current process.
pub fn locate(explicit: Option<&Path>) -> Location {
    Locator::system().resolve(explicit)
}
