//! # Catalog
//!
//! IGDB access layer.
//!
//! Core purpose is to fetch game records from the external catalog and hand
//! them to the server as plain structs. Owns the bearer token lifecycle so
//! callers never see the auth handshake.
//!
//! ## Token Flow
//!
//! - IGDB sits behind Twitch OAuth, client-credentials grant
//! - Tokens last hours, catalog calls happen every few minutes at most
//! - So: cache the token in-process, refresh only once expired
//! - Expiry is stored 60s early to avoid racing an in-flight catalog call
//! - Refresh holds the cache lock, concurrent requests wait instead of
//!   issuing duplicate exchanges
//!
//! ## Queries
//!
//! The catalog speaks a small query language posted as plain text:
//!
//! ```text
//! fields name, first_release_date, ...; where ...; sort ...; limit N;
//! ```
//!
//! Three fixed shapes are built here: upcoming (next 180 days, ascending),
//! recent (last 30 days, descending), trending (hyped and well rated).
//! All three restrict to main games (`category = 0`).

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod utils;

pub use client::{CatalogClient, CatalogConfig, Credentials};
pub use error::CatalogError;
pub use models::Game;
pub use query::QueryKind;
