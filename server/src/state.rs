use std::{sync::Arc, time::Instant};

use chrono::Utc;

use catalog::{CatalogClient, CatalogConfig, Game, QueryKind};

use super::{
    cache::{ResponseCache, RESPONSE_TTL_SECS},
    config::Config,
    error::AppError,
};

pub struct AppState {
    pub config: Config,
    pub catalog: CatalogClient,
    pub cache: ResponseCache,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let catalog = CatalogClient::new(CatalogConfig {
            api_url: config.api_url.clone(),
            auth_url: config.auth_url.clone(),
            credentials: config.credentials.clone(),
        });

        Arc::new(Self {
            config,
            catalog,
            cache: ResponseCache::new(RESPONSE_TTL_SECS),
            started_at: Instant::now(),
        })
    }

    pub async fn fetch_cached(&self, kind: QueryKind, limit: u32) -> Result<Vec<Game>, AppError> {
        let now = Utc::now().timestamp();

        if let Some(games) = self.cache.get(kind, limit, now).await {
            return Ok(games);
        }

        let games = self.catalog.fetch_games(kind, limit).await?;
        self.cache.put(kind, limit, games.clone(), now).await;

        Ok(games)
    }
}
