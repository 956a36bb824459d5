//! Integration tests for the backend client and the status page it drives.
//!
//! Each test runs a throwaway axum backend on an ephemeral port:
//! - GET /admin/ - liveness probe
//! - GET /user/  - user collection

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use core_eco::{BackendClient, check_backend, page::TERMINAL_FRONTEND};
use data_model_eco::{API_URL_ENV, ApiBaseUrl, ConnectionResult, StatusColor, StatusPage};
use serde_json::json;
use tokio::sync::Mutex;

/// Serializes tests that touch API_URL.
static ENV_MUTEX: Mutex<()> = Mutex::const_new(());

/// Serves the router on 127.0.0.1 and returns its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing is listening on.
async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> BackendClient {
    BackendClient::new(reqwest::Client::new(), ApiBaseUrl::resolve(Some(base_url)))
}

/// The error text reqwest itself produces for a GET against `url`.
async fn reqwest_error_text(url: &str) -> String {
    reqwest::Client::new()
        .get(url)
        .header(header::CONTENT_TYPE, "application/json")
        .send()
        .await
        .unwrap_err()
        .to_string()
}

async fn admin_requires_json(headers: HeaderMap) -> StatusCode {
    match headers.get(header::CONTENT_TYPE) {
        Some(value) if value.as_bytes() == b"application/json" => StatusCode::OK,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn healthy_backend() -> Router {
    Router::new()
        .route("/admin/", get(admin_requires_json))
        .route("/user/", get(|| async { Json(json!([{"id": 1}])) }))
}

//
// probe_backend
//

#[tokio::test]
async fn test_probe_success() {
    let base_url = spawn_backend(healthy_backend()).await;
    let result = client_for(&base_url).probe_backend().await;
    assert_eq!(result, ConnectionResult::connected());
    assert_eq!(result.message.as_deref(), Some("Backend connected!"));
}

#[tokio::test]
async fn test_probe_non_success_status() {
    for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR, StatusCode::SERVICE_UNAVAILABLE] {
        let router = Router::new().route("/admin/", get(move || async move { status }));
        let base_url = spawn_backend(router).await;

        let result = client_for(&base_url).probe_backend().await;
        assert!(!result.success);
        assert_eq!(result.message, Some(format!("Status: {}", status.as_u16())));
    }
}

#[tokio::test]
async fn test_probe_network_failure() {
    let base_url = unreachable_backend().await;
    let expected = reqwest_error_text(&format!("{}/admin/", base_url)).await;

    let result = client_for(&base_url).probe_backend().await;
    assert!(!result.success);
    assert_eq!(result.message, Some(expected));
}

//
// fetch_users
//

#[tokio::test]
async fn test_fetch_users_success() {
    let base_url = spawn_backend(healthy_backend()).await;
    let result = client_for(&base_url).fetch_users().await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "data": [{"id": 1}]})
    );
}

#[tokio::test]
async fn test_fetch_users_network_failure() {
    let base_url = unreachable_backend().await;
    let expected = reqwest_error_text(&format!("{}/user/", base_url)).await;

    let result = client_for(&base_url).fetch_users().await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": false, "message": expected})
    );
}

#[tokio::test]
async fn test_fetch_users_non_success_status() {
    let router = Router::new().route(
        "/user/",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "Token not found"}))) }),
    );
    let base_url = spawn_backend(router).await;

    let result = client_for(&base_url).fetch_users().await;
    assert_eq!(result, ConnectionResult::status_failure(401));
}

#[tokio::test]
async fn test_fetch_users_invalid_body() {
    let router = Router::new().route("/user/", get(|| async { "<html>not json</html>" }));
    let base_url = spawn_backend(router).await;

    let expected = reqwest::Client::new()
        .get(format!("{}/user/", base_url))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap_err()
        .to_string();

    let result = client_for(&base_url).fetch_users().await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": false, "message": expected})
    );
}

//
// Status page
//

#[tokio::test]
async fn test_status_page_connected() {
    let base_url = spawn_backend(healthy_backend()).await;
    let mut page = StatusPage::new(TERMINAL_FRONTEND, Some(base_url.as_str()));
    assert_eq!(page.backend.color, StatusColor::Orange);

    assert!(check_backend(&client_for(&base_url), &mut page).await);
    assert_eq!(page.backend.text, "✅ Backend Connected!");
    assert_eq!(page.backend.color, StatusColor::Green);
}

#[tokio::test]
async fn test_status_page_bad_status() {
    let router = Router::new().route("/admin/", get(|| async { StatusCode::BAD_GATEWAY }));
    let base_url = spawn_backend(router).await;
    let mut page = StatusPage::new(TERMINAL_FRONTEND, Some(base_url.as_str()));

    assert!(!check_backend(&client_for(&base_url), &mut page).await);
    assert_eq!(page.backend.text, "❌ Backend Error: Status: 502");
    assert_eq!(page.backend.color, StatusColor::Red);
}

#[tokio::test]
async fn test_status_page_network_failure() {
    let base_url = unreachable_backend().await;
    let expected = reqwest_error_text(&format!("{}/admin/", base_url)).await;
    let mut page = StatusPage::new(TERMINAL_FRONTEND, Some(base_url.as_str()));

    assert!(!check_backend(&client_for(&base_url), &mut page).await);
    assert!(page.backend.text.contains(&expected));
    assert_eq!(page.backend.color, StatusColor::Red);
}

//
// Base URL resolution
//

#[tokio::test]
async fn test_from_env_defaults_to_localhost() {
    let _guard = ENV_MUTEX.lock().await;
    unsafe {
        std::env::remove_var(API_URL_ENV);
    }
    let client = BackendClient::from_env();
    assert_eq!(client.api_base_url().admin_url(), "http://localhost:8080/admin/");
    assert_eq!(client.api_base_url().users_url(), "http://localhost:8080/user/");
}

#[tokio::test]
async fn test_from_env_targets_configured_backend() {
    let _guard = ENV_MUTEX.lock().await;
    let base_url = spawn_backend(healthy_backend()).await;
    unsafe {
        std::env::set_var(API_URL_ENV, &base_url);
    }
    let client = BackendClient::from_env();
    unsafe {
        std::env::remove_var(API_URL_ENV);
    }

    assert_eq!(client.probe_backend().await, ConnectionResult::connected());
    assert_eq!(client.fetch_users().await, ConnectionResult::with_data(json!([{"id": 1}])));

    unsafe {
        std::env::set_var(API_URL_ENV, "https://api.example.com");
    }
    let client = BackendClient::from_env();
    unsafe {
        std::env::remove_var(API_URL_ENV);
    }
    assert_eq!(client.api_base_url().admin_url(), "https://api.example.com/admin/");
    assert_eq!(client.api_base_url().users_url(), "https://api.example.com/user/");
}
