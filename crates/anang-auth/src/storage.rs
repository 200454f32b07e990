//! Durable key/value storage for session records.
//!
//! Values are opaque JSON strings. Three backends: one file per key in a
//! directory, the OS keychain with a file fallback, and an in-memory map.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anang_config::StorageConfig;

use crate::error::AuthError;

/// Storage for opaque string values under fixed keys.
pub trait SessionStorage: Send + Sync {
    /// Value under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the backend fails to read.
    fn load(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the backend fails to write.
    fn store(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the backend fails to delete.
    fn remove(&self, key: &str) -> Result<(), AuthError>;

    /// Short backend name for status output.
    fn backend(&self) -> &'static str;
}

/// Build the storage backend the config asks for.
///
/// # Errors
///
/// Returns [`AuthError::Storage`] when no storage directory can be resolved.
pub fn from_config(config: &StorageConfig) -> Result<Arc<dyn SessionStorage>, AuthError> {
    let dir = config.resolved_dir().ok_or_else(|| {
        AuthError::Storage("home directory not found, set storage.dir".into())
    })?;
    let files = FileStorage::new(dir);
    if config.use_keyring {
        Ok(Arc::new(KeyringStorage::new(&config.keyring_service, files)))
    } else {
        Ok(Arc::new(files))
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One `<key>.json` file per key, written with mode 0600.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        let path = self.path(key);
        fs::write(&path, value)
            .map_err(|e| AuthError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Storage(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Storage(format!("delete {}: {e}", path.display()))),
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

// ---------------------------------------------------------------------------
// KeyringStorage
// ---------------------------------------------------------------------------

/// OS keychain entry per key. Falls back to files when the keychain is
/// unavailable.
#[derive(Debug, Clone)]
pub struct KeyringStorage {
    service: String,
    fallback: FileStorage,
}

impl KeyringStorage {
    #[must_use]
    pub fn new(service: &str, fallback: FileStorage) -> Self {
        Self {
            service: service.to_string(),
            fallback,
        }
    }

    fn entry(&self, key: &str) -> Option<keyring::Entry> {
        match keyring::Entry::new(&self.service, key) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                None
            }
        }
    }
}

impl SessionStorage for KeyringStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        if let Some(entry) = self.entry(key)
            && let Ok(value) = entry.get_password()
            && !value.is_empty()
        {
            return Ok(Some(value));
        }
        self.fallback.load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), AuthError> {
        match self.entry(key).map(|entry| entry.set_password(value)) {
            Some(Ok(())) => Ok(()),
            Some(Err(error)) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.fallback.store(key, value)
            }
            None => self.fallback.store(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.entry(key) {
            // A missing credential is fine here.
            let _ = entry.delete_credential();
        }
        self.fallback.remove(key)
    }

    fn backend(&self) -> &'static str {
        "keyring"
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Process-local storage, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.values().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.values().remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
