use serde::{Deserialize, Serialize};

pub const AUTH_ENDPOINT: &str = "https://id.twitch.tv/oauth2/token";
pub const CATALOG_ENDPOINT: &str = "https://api.igdb.com/v4";

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub name: String,
    pub summary: Option<String>,
    pub first_release_date: Option<i64>,
    pub cover: Option<Image>,
    pub screenshots: Option<Vec<Image>>,
    pub genres: Option<Vec<Genre>>,
    pub platforms: Option<Vec<Platform>>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub hypes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u64,
    pub name: String,
    pub abbreviation: Option<String>,
}
