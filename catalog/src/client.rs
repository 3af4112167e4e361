use std::time::Duration;

use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    auth::{system_clock, Clock, TokenCache},
    error::{CatalogError, Result},
    models::Game,
    query::{build_query, QueryKind},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

pub struct CatalogConfig {
    pub api_url: String,
    pub auth_url: String,
    pub credentials: Option<Credentials>,
}

pub struct CatalogClient {
    http: Client,
    api_url: String,
    client_id: Option<String>,
    tokens: Option<TokenCache>,
    clock: Clock,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_clock(config, system_clock())
    }

    pub fn with_clock(config: CatalogConfig, clock: Clock) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        let client_id = config
            .credentials
            .as_ref()
            .map(|c| c.client_id.clone());
        let tokens = config
            .credentials
            .map(|c| TokenCache::new(config.auth_url, c, clock.clone()));

        Self {
            http,
            api_url: config.api_url,
            client_id,
            tokens,
            clock,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.tokens.is_some()
    }

    pub async fn fetch_games(&self, kind: QueryKind, limit: u32) -> Result<Vec<Game>> {
        let query = build_query(kind, limit, (self.clock)());
        debug!("Fetching {} games, limit {limit}", kind.as_str());

        self.request("games", query).await
    }

    // Minimal live call for health reporting.
    pub async fn probe(&self) -> Result<()> {
        let _: Vec<serde_json::Value> = self.request("games", "fields id; limit 1;".to_string()).await?;

        Ok(())
    }

    async fn request<T: DeserializeOwned>(&self, endpoint: &str, body: String) -> Result<T> {
        let (token, client_id) = match (&self.tokens, &self.client_id) {
            (Some(tokens), Some(client_id)) => (tokens.get_token(&self.http).await?, client_id),
            _ => return Err(CatalogError::Config("client id and secret are required")),
        };

        let response = send_with_retry(|| {
            self.http
                .post(format!("{}/{endpoint}", self.api_url))
                .header("Client-ID", client_id)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(CONTENT_TYPE, "text/plain")
                .body(body.clone())
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

// One bounded retry on transient network failure; 4xx/5xx statuses are
// returned to the caller untouched and never retried.
pub(crate) async fn send_with_retry(
    build: impl Fn() -> RequestBuilder,
) -> std::result::Result<Response, reqwest::Error> {
    match build().send().await {
        Err(e) if e.is_timeout() || e.is_connect() => build().send().await,
        result => result,
    }
}
