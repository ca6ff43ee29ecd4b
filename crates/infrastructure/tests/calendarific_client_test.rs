use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use holiday_relay_application::ports::HolidayProvider;
use holiday_relay_domain::config::ProviderConfig;
use holiday_relay_infrastructure::CalendarificClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Serves the given router on an ephemeral port, stub for the upstream API.
async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    addr
}

fn client_for(addr: SocketAddr, path: &str) -> CalendarificClient {
    CalendarificClient::new(&ProviderConfig {
        api_key: "test-key".to_string(),
        base_url: format!("http://{addr}{path}"),
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn fetch_sends_query_params_and_parses_payload() {
    let router = Router::new().route(
        "/holidays",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("api_key").map(String::as_str), Some("test-key"));
            assert_eq!(params.get("country").map(String::as_str), Some("US"));
            assert_eq!(params.get("year").map(String::as_str), Some("2024"));
            Json(json!({
                "response": { "holidays": [ { "name": "Independence Day" } ] }
            }))
        }),
    );
    let addr = spawn_stub(router).await;

    let payload = client_for(addr, "/holidays")
        .fetch("US", 2024)
        .await
        .unwrap();

    assert_eq!(
        payload["response"]["holidays"][0]["name"],
        "Independence Day"
    );
}

#[tokio::test]
async fn non_200_status_is_surfaced_unchanged() {
    let router = Router::new().route(
        "/holidays",
        get(|| async { (StatusCode::NOT_FOUND, "no such endpoint") }),
    );
    let addr = spawn_stub(router).await;

    let err = client_for(addr, "/holidays")
        .fetch("US", 2024)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        holiday_relay_domain::DomainError::UpstreamStatus(404)
    ));
}

#[tokio::test]
async fn rate_limited_status_is_surfaced_unchanged() {
    let router = Router::new().route(
        "/holidays",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let addr = spawn_stub(router).await;

    let err = client_for(addr, "/holidays")
        .fetch("US", 2024)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        holiday_relay_domain::DomainError::UpstreamStatus(429)
    ));
}

#[tokio::test]
async fn malformed_body_maps_to_fetch_failed() {
    let router = Router::new().route("/holidays", get(|| async { "not json at all" }));
    let addr = spawn_stub(router).await;

    let err = client_for(addr, "/holidays")
        .fetch("US", 2024)
        .await
        .unwrap_err();

    match err {
        holiday_relay_domain::DomainError::FetchFailed(msg) => assert!(!msg.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upstream_maps_to_fetch_failed() {
    // Bind and immediately drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr, "/holidays")
        .fetch("US", 2024)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        holiday_relay_domain::DomainError::FetchFailed(_)
    ));
}

#[tokio::test]
async fn year_is_formatted_as_plain_integer() {
    let router = Router::new().route(
        "/holidays",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            Json::<Value>(json!({ "echo": params.get("year") }))
        }),
    );
    let addr = spawn_stub(router).await;

    let payload = client_for(addr, "/holidays")
        .fetch("BR", 2025)
        .await
        .unwrap();

    assert_eq!(payload["echo"], "2025");
}
