use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use catalog::{
    query::{DEFAULT_LIMIT, MAX_LIMIT},
    utils::present_games,
    Game, QueryKind,
};

use super::{cache::RESPONSE_TTL_SECS, error::AppError, state::AppState};

#[derive(Deserialize)]
pub struct GamesParams {
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct GamesResponse {
    pub games: Vec<Game>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl GamesResponse {
    pub fn ok(games: Vec<Game>) -> Self {
        Self {
            games,
            success: true,
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn degraded(message: String) -> Self {
        Self {
            games: Vec::new(),
            success: false,
            error: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub async fn upcoming_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GamesParams>,
) -> Result<Response, AppError> {
    games_response(state, QueryKind::Upcoming, params).await
}

pub async fn recent_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GamesParams>,
) -> Result<Response, AppError> {
    games_response(state, QueryKind::Recent, params).await
}

pub async fn trending_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GamesParams>,
) -> Result<Response, AppError> {
    games_response(state, QueryKind::Trending, params).await
}

async fn games_response(
    state: Arc<AppState>,
    kind: QueryKind,
    params: GamesParams,
) -> Result<Response, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let games = state.fetch_cached(kind, limit).await.map_err(|e| {
        warn!("Failed to fetch {} games: {e}", kind.as_str());
        e
    })?;

    Ok((
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={RESPONSE_TTL_SECS}"),
        )],
        Json(GamesResponse::ok(present_games(games))),
    )
        .into_response())
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: u64,
    pub version: &'static str,
    pub services: ServiceHealth,
    pub environment: String,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub catalog: &'static str,
    pub api: &'static str,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    let catalog_status = if !state.catalog.has_credentials() {
        "degraded"
    } else {
        match state.catalog.probe().await {
            Ok(()) => "operational",
            Err(e) => {
                warn!("Catalog probe failed: {e}");
                "down"
            }
        }
    };

    let status = match catalog_status {
        "down" => "unhealthy",
        "degraded" => "degraded",
        _ => "healthy",
    };

    let code = if status == "unhealthy" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    let health = HealthResponse {
        status,
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        services: ServiceHealth {
            catalog: catalog_status,
            api: "operational",
        },
        environment: state.config.environment.clone(),
    };

    (code, Json(health)).into_response()
}
