//! Durable client storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_keyring_service() -> String {
    "anang-portal".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the session files. Empty means `~/.anang`.
    #[serde(default)]
    pub dir: String,

    /// Keyring service name used when `use_keyring` is set.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Store session records in the OS keychain, with the file as fallback.
    #[serde(default)]
    pub use_keyring: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            keyring_service: default_keyring_service(),
            use_keyring: false,
        }
    }
}

impl StorageConfig {
    /// Resolved storage directory, or `None` when no home directory exists.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|h| h.join(".anang"))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/tmp/anang-test".into(),
            ..StorageConfig::default()
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/anang-test")));
    }

    #[test]
    fn keyring_is_opt_in() {
        let config = StorageConfig::default();
        assert!(!config.use_keyring);
        assert_eq!(config.keyring_service, "anang-portal");
    }
}
