use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use catalog::CatalogError;

use super::routes::GamesResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::Config(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Catalog(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// Endpoint boundary: every failure becomes a degraded body, never a panic.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        (status, Json(GamesResponse::degraded(self.to_string()))).into_response()
    }
}
