//! # Response Cache
//!
//! In-memory TTL cache for proxied catalog responses.
//!
//! The upstream catalog changes slowly and rate-limits aggressively, so
//! every endpoint serves from this cache for 300 seconds before a fresh
//! upstream call is made. One TTL for all three endpoints, and it is the
//! same number the `Cache-Control` header advertises.
//!
//! Entries are keyed by (query kind, limit) since a different limit is a
//! different upstream query. Replacement is a whole-entry swap under the
//! write lock; readers never observe a partially updated entry.

use std::collections::HashMap;

use tokio::sync::RwLock;

use catalog::{Game, QueryKind};

pub const RESPONSE_TTL_SECS: i64 = 300;

struct CacheEntry {
    games: Vec<Game>,
    expires_at: i64,
}

pub struct ResponseCache {
    entries: RwLock<HashMap<(QueryKind, u32), CacheEntry>>,
    ttl_secs: i64,
}

impl ResponseCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_secs,
        }
    }

    pub async fn get(&self, kind: QueryKind, limit: u32, now: i64) -> Option<Vec<Game>> {
        let entries = self.entries.read().await;

        entries
            .get(&(kind, limit))
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.games.clone())
    }

    pub async fn put(&self, kind: QueryKind, limit: u32, games: Vec<Game>, now: i64) {
        let mut entries = self.entries.write().await;

        entries.insert(
            (kind, limit),
            CacheEntry {
                games,
                expires_at: now + self.ttl_secs,
            },
        );
    }
}
