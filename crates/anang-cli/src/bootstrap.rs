use std::sync::Arc;

use anang_api::ApiClient;
use anang_auth::SessionStore;
use anang_config::AnangConfig;
use anyhow::Context;

/// Load layered config, then apply the `--api-url` override.
pub fn load_config(api_url: Option<&str>) -> anyhow::Result<AnangConfig> {
    let mut config = AnangConfig::load_with_dotenv().context("failed to load anang config")?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
        config.validate().context("invalid --api-url")?;
    }
    tracing::debug!(base_url = %config.api.base_url, "config loaded");
    Ok(config)
}

/// Everything a command handler needs.
pub struct AppContext {
    pub config: AnangConfig,
    pub api: ApiClient,
    pub store: SessionStore,
}

impl AppContext {
    pub fn init(config: AnangConfig) -> anyhow::Result<Self> {
        let api = ApiClient::from_config(&config.api);
        let storage: Arc<dyn anang_auth::SessionStorage> =
            anang_auth::storage::from_config(&config.storage)
                .context("failed to open session storage")?;
        let store = SessionStore::new(api.clone(), storage);
        Ok(Self { config, api, store })
    }
}
