//! Identity type.
//!
//! Wraps an age private key loaded from, or generated into, a key file.
//!
//! The key file layout is fixed by position:
//!
//! ```text
//! # created: 2024-05-01T10:00:00+02:00
//! # public key: age1...
//! AGE-SECRET-KEY-1...
//! ```
//!
//! The two comment lines are informational and never validated. Only the
//! third line is parsed, and anything after it is ignored.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use age::secrecy::ExposeSecret;
use age::x25519;
use chrono::{Local, SecondsFormat};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::types::PublicKey;
use crate::error::{ConfigError, CryptoError, Error, FormatError, IoError, Result};

/// A parsed key file.
///
/// Holds the three significant lines by name rather than by index.
pub struct KeyFile {
    created: String,
    public_key: String,
    secret: Zeroizing<String>,
}

impl KeyFile {
    /// Read the three leading lines of a key file.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidKeyFile` if fewer than three lines exist.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let mut lines = contents.lines();
        let mut next = || lines.next().map(str::to_owned);

        match (next(), next(), next()) {
            (Some(created), Some(public_key), Some(secret)) => Ok(Self {
                created,
                public_key,
                secret: Zeroizing::new(secret),
            }),
            _ => Err(FormatError::InvalidKeyFile {
                path: path.to_path_buf(),
                lines: contents.lines().count(),
            }
            .into()),
        }
    }

    /// Render the on-disk representation.
    ///
    /// No trailing newline follows the secret line, matching files written by
    /// earlier releases.
    pub fn render(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "{}\n{}\n{}",
            self.created,
            self.public_key,
            self.secret.as_str()
        ))
    }

    fn from_identity(identity: &x25519::Identity) -> Self {
        let created = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let secret = identity.to_string();
        Self {
            created: format!("{}{}", constants::CREATED_PREFIX, created),
            public_key: format!(
                "{}{}",
                constants::PUBLIC_KEY_PREFIX,
                identity.to_public()
            ),
            secret: Zeroizing::new(secret.expose_secret().to_string()),
        }
    }

    fn to_identity(&self) -> Result<x25519::Identity> {
        self.secret
            .trim()
            .parse::<x25519::Identity>()
            .map_err(|e: &str| CryptoError::InvalidPrivateKey(e.to_string()).into())
    }
}

/// A private key identity for encrypting and decrypting values
pub struct Identity {
    inner: x25519::Identity,
    path: PathBuf,
}

impl Identity {
    /// Resolve the key file path.
    ///
    /// Precedence: the explicit path, then `AGE_KEY_FILE`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoKeyFile` if neither is set.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        resolve_key_path(explicit, std::env::var_os(constants::KEY_FILE_ENV))
    }

    /// Resolve the key file path and load the identity from it.
    pub fn open(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::locate(explicit)?;
        Self::load(&path)
    }

    /// Load an identity from a key file.
    ///
    /// # Errors
    ///
    /// Returns `IoError::ReadFile` if the file cannot be read,
    /// `FormatError::InvalidKeyFile` if it has fewer than three lines, or
    /// `CryptoError::InvalidPrivateKey` if line three is not an age secret key.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading identity");

        let contents = Zeroizing::new(fs::read_to_string(path).map_err(|source| {
            IoError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        })?);

        #[cfg(unix)]
        warn_if_exposed(path);

        let inner = KeyFile::parse(path, &contents)?.to_identity()?;

        debug!("identity loaded");

        Ok(Self {
            inner,
            path: path.to_path_buf(),
        })
    }

    /// Generate a new identity and write its key file.
    ///
    /// Creates the parent directory (0700 on Unix) if needed and writes the
    /// file with 0600 permissions.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyFileExists` if `path` exists and `force` is false,
    /// or an `IoError` if the directory or file cannot be written.
    pub fn generate(path: &Path, force: bool) -> Result<Self> {
        debug!(path = %path.display(), "generating new identity");

        if path.exists() && !force {
            return Err(Error::KeyFileExists(path.to_path_buf()));
        }

        let inner = x25519::Identity::generate();
        let key_file = KeyFile::from_identity(&inner);

        let dir = parent_dir(path);
        create_private_dir(dir)?;

        let write_err = |source: std::io::Error| IoError::WriteFile {
            path: path.to_path_buf(),
            source,
        };
        // NamedTempFile is created 0600 on Unix, so the secret is never
        // readable by others, even before the rename.
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(key_file.render().as_bytes())
            .map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        install(tmp, path, force)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(constants::KEY_FILE_MODE))
                .map_err(write_err)?;
        }

        debug!(path = %path.display(), "identity saved");

        Ok(Self {
            inner,
            path: path.to_path_buf(),
        })
    }

    /// Default location written by `generate-key` (`keys/key.txt`).
    pub fn default_path() -> PathBuf {
        Path::new(constants::KEY_DIR).join(constants::KEY_FILE)
    }

    /// Corresponding public key
    pub fn public_key(&self) -> PublicKey {
        self.inner.to_public().to_string()
    }

    /// Reference to the inner age identity
    pub fn as_age(&self) -> &x25519::Identity {
        &self.inner
    }

    /// Key file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("path", &self.path)
            .field("public_key", &self.public_key())
            .finish()
    }
}

/// Pick the key file path from an explicit argument or the environment value.
///
/// An empty environment value counts as unset.
fn resolve_key_path(explicit: Option<&Path>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match env {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(ConfigError::NoKeyFile.into()),
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn create_private_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::KEY_DIR_MODE);
    }
    builder.create(dir).map_err(|source| {
        IoError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Rename a written temporary file onto `path`.
///
/// Without `force` the rename fails if `path` appeared after the existence
/// check in [`Identity::generate`].
fn install(tmp: tempfile::NamedTempFile, path: &Path, force: bool) -> Result<()> {
    let persisted = if force {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };

    match persisted {
        Ok(_) => Ok(()),
        Err(e) if !force && e.error.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(Error::KeyFileExists(path.to_path_buf()))
        }
        Err(e) => Err(IoError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        }
        .into()),
    }
}

/// Warn when group or other permission bits are set on a key file.
#[cfg(unix)]
fn warn_if_exposed(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "insecure key file permissions"
            );
        }
    }
}
