use crate::auth::repo::{InMemoryUserStore, UserStore};
use crate::config::AppConfig;
use crate::images::services::{ImageGenerator, PlaceholderImages};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub images: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        // Lives as long as the process; nothing is persisted.
        let users = Arc::new(InMemoryUserStore::new()) as Arc<dyn UserStore>;
        let images = Arc::new(PlaceholderImages) as Arc<dyn ImageGenerator>;

        Ok(Self::from_parts(config, users, images))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        images: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            config,
            users,
            images,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with_static_dir(std::path::PathBuf::from("public"))
    }

    #[cfg(test)]
    pub fn fake_with_static_dir(static_dir: std::path::PathBuf) -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            gemini_api_key: String::new(),
            static_dir,
        });
        let users = Arc::new(InMemoryUserStore::new()) as Arc<dyn UserStore>;
        let images = Arc::new(PlaceholderImages) as Arc<dyn ImageGenerator>;
        Self::from_parts(config, users, images)
    }
}
