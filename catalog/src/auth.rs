use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    client::{send_with_retry, Credentials},
    error::{CatalogError, Result},
    models::TokenResponse,
};

pub const SAFETY_MARGIN_SECS: i64 = 60;

pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(|| Utc::now().timestamp())
}

struct CachedToken {
    value: String,
    expires_at: i64,
}

pub struct TokenCache {
    auth_url: String,
    credentials: Credentials,
    // Holding this lock across the exchange keeps racing requests down to one refresh.
    token: Mutex<Option<CachedToken>>,
    clock: Clock,
}

impl TokenCache {
    pub fn new(auth_url: String, credentials: Credentials, clock: Clock) -> Self {
        Self {
            auth_url,
            credentials,
            token: Mutex::new(None),
            clock,
        }
    }

    pub async fn get_token(&self, http: &Client) -> Result<String> {
        let mut slot = self.token.lock().await;

        if let Some(cached) = slot.as_ref() {
            if (self.clock)() < cached.expires_at {
                return Ok(cached.value.clone());
            }

            debug!("Cached token expired, refreshing");
        }

        // A failed exchange leaves the previous entry in place.
        let fresh = self.exchange(http).await?;
        let value = fresh.value.clone();
        *slot = Some(fresh);

        Ok(value)
    }

    async fn exchange(&self, http: &Client) -> Result<CachedToken> {
        let response = send_with_retry(|| {
            http.post(&self.auth_url).query(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
        })
        .await
        .map_err(|e| CatalogError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Token exchange rejected with status {status}");
            return Err(CatalogError::Auth(format!("auth endpoint returned {status}")));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Auth(e.to_string()))?;

        Ok(CachedToken {
            value: parsed.access_token,
            expires_at: (self.clock)() + (parsed.expires_in - SAFETY_MARGIN_SECS).max(0),
        })
    }
}
