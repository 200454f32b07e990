//! # anang-config
//!
//! Layered configuration loading for the Anang portal client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ANANG_*` prefix, `__` as separator)
//! 2. Project-level `.anang/config.toml`
//! 3. User-level `~/.config/anang/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ANANG_API__BASE_URL` -> `api.base_url`,
//! `ANANG_STORAGE__USE_KEYRING` -> `storage.use_keyring`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use anang_config::AnangConfig;
//!
//! let config = AnangConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base());
//! ```

mod api;
mod error;
mod general;
mod storage;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnangConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AnangConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".anang/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ANANG_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http base URL or an
    /// unknown default output format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if !OUTPUT_FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.general.default_format
                ),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("anang").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AnangConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base(), "http://localhost:8000");
        assert!(!config.storage.use_keyring);
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let mut config = AnangConfig::default();
        config.general.default_format = "xml".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.default_format"
        ));
    }
}
