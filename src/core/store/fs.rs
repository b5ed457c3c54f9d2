//! Filesystem helpers for store writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{IoError, Result};

/// Write `data` to `path` through a sibling temporary file.
///
/// Creates the parent directory if it does not exist. A crash or error before
/// the rename leaves any existing file at `path` untouched.
pub(super) fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| IoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| IoError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    tmp.persist(path).map_err(|e| IoError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
