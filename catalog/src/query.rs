pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 50;

pub const UPCOMING_WINDOW_SECS: i64 = 180 * 24 * 60 * 60;
pub const RECENT_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

const FIELDS: &str = "name, summary, first_release_date, cover.url, screenshots.url, genres.name, platforms.name, platforms.abbreviation, rating, rating_count, hypes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Upcoming,
    Recent,
    Trending,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Upcoming => "upcoming",
            QueryKind::Recent => "recent",
            QueryKind::Trending => "trending",
        }
    }
}

pub fn build_query(kind: QueryKind, limit: u32, now: i64) -> String {
    match kind {
        QueryKind::Upcoming => format!(
            "fields {FIELDS}; where first_release_date >= {now} & first_release_date <= {} & category = 0; sort first_release_date asc; limit {limit};",
            now + UPCOMING_WINDOW_SECS
        ),
        QueryKind::Recent => format!(
            "fields {FIELDS}; where first_release_date >= {} & first_release_date <= {now} & category = 0; sort first_release_date desc; limit {limit};",
            now - RECENT_WINDOW_SECS
        ),
        QueryKind::Trending => format!(
            "fields {FIELDS}; where hypes > 5 & rating > 70 & category = 0; sort hypes desc; limit {limit};"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_window() {
        let query = build_query(QueryKind::Upcoming, 20, 1_700_000_000);

        assert!(query.contains("first_release_date >= 1700000000"));
        assert!(query.contains("first_release_date <= 1715552000"));
        assert!(query.contains("sort first_release_date asc"));
        assert!(query.contains("limit 20;"));
    }

    #[test]
    fn test_recent_window() {
        let query = build_query(QueryKind::Recent, 8, 1_700_000_000);

        assert!(query.contains("first_release_date >= 1697408000"));
        assert!(query.contains("first_release_date <= 1700000000"));
        assert!(query.contains("sort first_release_date desc"));
        assert!(query.contains("limit 8;"));
    }

    #[test]
    fn test_trending_predicate() {
        let query = build_query(QueryKind::Trending, 6, 1_700_000_000);

        assert!(query.contains("hypes > 5 & rating > 70"));
        assert!(query.contains("sort hypes desc"));
        assert!(!query.contains("first_release_date >="));
    }

    #[test]
    fn test_main_game_filter() {
        for kind in [QueryKind::Upcoming, QueryKind::Recent, QueryKind::Trending] {
            assert!(build_query(kind, 20, 1_700_000_000).contains("category = 0"));
        }
    }
}
