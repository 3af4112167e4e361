//! # Server
//!
//! Web service for the game release tracker.
//!
//! # General Infrastructure
//! - Frontend talks to this backend only; the backend is the sole holder of
//!   the catalog credentials
//! - Backend proxies three fixed catalog queries and a health probe
//! - Catalog responses are cached in-process for 300 seconds, so a burst of
//!   page loads costs one upstream call per query shape
//!
//! # Endpoints
//!
//! - `GET /games/upcoming` — releases in the next 180 days, soonest first
//! - `GET /games/recent` — releases from the last 30 days, newest first
//! - `GET /games/trending` — hyped and well-rated titles
//! - `GET /health` — credential + live-probe status
//!
//! Each games endpoint takes an optional `limit` query parameter (1-50,
//! default 20) and answers `{games, success, error?, timestamp}` with a
//! `Cache-Control: public, max-age=300` header.

use std::time::Duration;

use anyhow::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{health_handler, recent_handler, trending_handler, upcoming_handler};
use state::AppState;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/games/upcoming", get(upcoming_handler))
        .route("/games/recent", get(recent_handler))
        .route("/games/trending", get(trending_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
