//! Errors raised while loading `AnangConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `ANANG_*` variable could not be parsed into the config.
    #[error("failed to load anang config: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is not usable, such as a non-http base URL.
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
