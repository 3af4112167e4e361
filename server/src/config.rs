use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use catalog::{models, Credentials};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub environment: String,
    pub auth_url: String,
    pub api_url: String,
    pub credentials: Option<Credentials>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "8080"),
            environment: try_load("RUST_ENV", "development"),
            auth_url: try_load("TWITCH_AUTH_URL", models::AUTH_ENDPOINT),
            api_url: try_load("IGDB_API_URL", models::CATALOG_ENDPOINT),
            credentials: load_credentials(),
        }
    }
}

fn load_credentials() -> Option<Credentials> {
    match (read_secret("TWITCH_CLIENT_ID"), read_secret("TWITCH_CLIENT_SECRET")) {
        (Some(client_id), Some(client_secret)) => Some(Credentials {
            client_id,
            client_secret,
        }),
        _ => {
            warn!("Catalog credentials missing, endpoints will serve degraded responses");
            None
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

// Environment variable first, then the mounted secret file.
fn read_secret(secret_name: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_name) {
        return Some(value);
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
}
