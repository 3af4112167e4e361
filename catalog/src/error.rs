use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog credentials are not configured: {0}")]
    Config(&'static str),

    #[error("Token exchange failed: {0}")]
    Auth(String),

    #[error("Catalog request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Catalog returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
