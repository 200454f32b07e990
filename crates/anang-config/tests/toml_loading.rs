//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use anang_config::AnangConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_api_and_storage_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.anang.ca"

[storage]
dir = "/var/lib/anang"
use_keyring = true
"#,
        )?;

        let config: AnangConfig = Figment::from(Serialized::defaults(AnangConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.anang.ca");
        assert_eq!(config.storage.dir, "/var/lib/anang");
        assert!(config.storage.use_keyring);
        assert_eq!(config.storage.keyring_service, "anang-portal");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example"
"#,
        )?;
        jail.set_env("ANANG_API__BASE_URL", "https://from-env.example");

        let config: AnangConfig = Figment::from(Serialized::defaults(AnangConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ANANG_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://from-env.example");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".anang")?;
        jail.create_file(
            ".anang/config.toml",
            r#"
[general]
default_format = "table"
"#,
        )?;

        let config = AnangConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("ANANG_API__BASE_URL", "localhost:8000");
        assert!(AnangConfig::load().is_err());
        Ok(())
    });
}
