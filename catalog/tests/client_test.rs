use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use httpmock::prelude::*;
use serde_json::json;

use catalog::{CatalogClient, CatalogConfig, CatalogError, Credentials, QueryKind};

fn test_config(server: &MockServer) -> CatalogConfig {
    CatalogConfig {
        api_url: server.url("/v4"),
        auth_url: server.url("/oauth2/token"),
        credentials: Some(Credentials {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
        }),
    }
}

fn mock_auth<'a>(server: &'a MockServer, token: &str, expires_in: i64) -> httpmock::Mock<'a> {
    let token = token.to_string();
    server.mock(move |when, then| {
        when.method(POST)
            .path("/oauth2/token")
            .query_param("client_id", "test-client")
            .query_param("client_secret", "test-secret")
            .query_param("grant_type", "client_credentials");
        then.status(200).json_body(json!({
            "access_token": token,
            "expires_in": expires_in,
            "token_type": "bearer"
        }));
    })
}

#[tokio::test]
async fn test_fetch_parses_games() {
    let server = MockServer::start();
    let _auth = mock_auth(&server, "token-1", 3600);

    let games_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v4/games")
            .header("client-id", "test-client")
            .header("authorization", "Bearer token-1")
            .body_contains("sort first_release_date asc")
            .body_contains("limit 20;");
        then.status(200).json_body(json!([
            {
                "id": 1942,
                "name": "The Witness",
                "first_release_date": 1453766400,
                "cover": { "id": 7, "url": "//img/t_thumb/co7.jpg" },
                "rating": 84.5,
                "hypes": 12
            },
            { "id": 7346, "name": "Untitled Sequel" }
        ]));
    });

    let client = CatalogClient::new(test_config(&server));
    let games = client.fetch_games(QueryKind::Upcoming, 20).await.unwrap();

    games_mock.assert();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].name, "The Witness");
    assert_eq!(games[0].cover.as_ref().unwrap().url, "//img/t_thumb/co7.jpg");
    assert_eq!(games[1].first_release_date, None);
}

#[tokio::test]
async fn test_token_reused_within_validity_window() {
    let server = MockServer::start();
    let auth_mock = mock_auth(&server, "token-1", 3600);

    let games_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v4/games")
            .header("authorization", "Bearer token-1");
        then.status(200).json_body(json!([]));
    });

    let client = CatalogClient::new(test_config(&server));
    client.fetch_games(QueryKind::Upcoming, 20).await.unwrap();
    client.fetch_games(QueryKind::Trending, 6).await.unwrap();

    assert_eq!(auth_mock.hits(), 1);
    assert_eq!(games_mock.hits(), 2);
}

#[tokio::test]
async fn test_token_refreshed_after_expiry() {
    let server = MockServer::start();
    let auth_mock = mock_auth(&server, "token-1", 120);

    let games_mock = server.mock(|when, then| {
        when.method(POST).path("/v4/games");
        then.status(200).json_body(json!([]));
    });

    // Token lives 120s minus the 60s margin; jump the clock past that.
    let now = Arc::new(AtomicI64::new(1_700_000_000));
    let clock_now = now.clone();
    let client = CatalogClient::with_clock(
        test_config(&server),
        Arc::new(move || clock_now.load(Ordering::SeqCst)),
    );

    client.fetch_games(QueryKind::Recent, 20).await.unwrap();
    assert_eq!(auth_mock.hits(), 1);

    now.fetch_add(61, Ordering::SeqCst);
    client.fetch_games(QueryKind::Recent, 20).await.unwrap();

    assert_eq!(auth_mock.hits(), 2);
    assert_eq!(games_mock.hits(), 2);
}

#[tokio::test]
async fn test_auth_failure_maps_to_auth_error() {
    let server = MockServer::start();
    let _auth = server.mock(|when, then| {
        when.method(POST).path("/oauth2/token");
        then.status(401).json_body(json!({ "message": "invalid client secret" }));
    });

    let client = CatalogClient::new(test_config(&server));
    let result = client.fetch_games(QueryKind::Upcoming, 20).await;

    assert!(matches!(result, Err(CatalogError::Auth(_))));
}

#[tokio::test]
async fn test_upstream_failure_maps_to_status_error() {
    let server = MockServer::start();
    let _auth = mock_auth(&server, "token-1", 3600);
    let _games = server.mock(|when, then| {
        when.method(POST).path("/v4/games");
        then.status(500).body("catalog exploded");
    });

    let client = CatalogClient::new(test_config(&server));
    let result = client.fetch_games(QueryKind::Trending, 6).await;

    match result {
        Err(CatalogError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "catalog exploded");
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_credentials() {
    let server = MockServer::start();
    let config = CatalogConfig {
        api_url: server.url("/v4"),
        auth_url: server.url("/oauth2/token"),
        credentials: None,
    };

    let client = CatalogClient::new(config);
    assert!(!client.has_credentials());

    let result = client.fetch_games(QueryKind::Upcoming, 20).await;
    assert!(matches!(result, Err(CatalogError::Config(_))));
}

#[tokio::test]
async fn test_probe_hits_catalog() {
    let server = MockServer::start();
    let _auth = mock_auth(&server, "token-1", 3600);
    let probe_mock = server.mock(|when, then| {
        when.method(POST).path("/v4/games").body_contains("fields id; limit 1;");
        then.status(200).json_body(json!([{ "id": 1 }]));
    });

    let client = CatalogClient::new(test_config(&server));
    client.probe().await.unwrap();

    probe_mock.assert();
}
