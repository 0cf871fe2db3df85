//! Web host routes against an in-memory collection and a mock upstream

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::field_reassign_with_default)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::NaiveDate;
use orderdesk_client::{ApiCall, InMemoryOrdersApi};
use orderdesk_core::{Config, Order, OrderStatus};
use orderdesk_server::{AppState, build_app, build_router};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order(n: u32) -> Order {
    Order {
        id: n.to_string(),
        order_number: format!("ZAM-{n:03}"),
        customer: "Jan Kowalski".to_string(),
        status: OrderStatus::New,
        due_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        total_gross: Decimal::new(12345, 2),
    }
}

fn in_memory_app(api: &InMemoryOrdersApi) -> Router {
    build_router(AppState::with_orders(
        Config::default(),
        Arc::new(api.clone()),
    ))
}

fn upstream_app(server: &MockServer) -> Router {
    let mut config = Config::default();
    config.upstream.base_url = server.uri();
    build_app(config).unwrap()
}

fn new_order_body() -> Value {
    json!({
        "orderNumber": "ZAM-2024-001",
        "customer": "Jan Kowalski",
        "status": "new",
        "dueDate": "2024-03-05",
        "totalGross": 123.45
    })
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = in_memory_app(&InMemoryOrdersApi::new());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_list_forwards_page_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "8",
                "orderNumber": "ZAM-008",
                "customer": "Anna Nowak",
                "status": "shipped",
                "dueDate": "2024-03-05",
                "totalGross": 99.9
            }],
            "total": 8,
            "totalPages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(get("/api/orders?page=2&perPage=7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], json!(8));
    assert_eq!(body["totalPages"], json!(2));
    assert_eq!(body["items"][0]["orderNumber"], json!("ZAM-008"));
    assert_eq!(body["items"][0]["status"], json!("shipped"));
}

#[tokio::test]
async fn test_list_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(get("/api/orders?page=1&perPage=7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["code"], json!("UPSTREAM_FAILED"));
}

#[tokio::test]
async fn test_list_rejects_bad_query() {
    let api = InMemoryOrdersApi::new();

    for uri in [
        "/api/orders?page=0&perPage=7",
        "/api/orders?page=1&perPage=101",
        "/api/orders?perPage=7",
        "/api/orders?page=abc&perPage=7",
    ] {
        let response = in_memory_app(&api).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    assert_eq!(api.list_calls(), 0);
}

#[tokio::test]
async fn test_create_forwards_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(new_order_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(post_json("/api/orders", new_order_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_passes_field_errors_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "fieldErrors": [{"field": "customer", "message": "required"}]
        })))
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(post_json("/api/orders", new_order_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await,
        json!({"fieldErrors": [{"field": "customer", "message": "required"}]})
    );
}

#[tokio::test]
async fn test_create_passes_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(post_json("/api/orders", new_order_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let api = InMemoryOrdersApi::new();

    let truncated = in_memory_app(&api)
        .oneshot(post_json("/api/orders", "{\"orderNumber\":".to_string()))
        .await
        .unwrap();
    let wrong_shape = in_memory_app(&api)
        .oneshot(post_json("/api/orders", json!({"customer": 5}).to_string()))
        .await
        .unwrap();

    assert_eq!(truncated.status(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_shape.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(truncated).await["code"], json!("BAD_REQUEST"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_create_refuses_unknown_status() {
    let api = InMemoryOrdersApi::new();
    let mut body = new_order_body();
    body["status"] = json!("W trakcie");

    let response = in_memory_app(&api)
        .oneshot(post_json("/api/orders", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], json!("BAD_REQUEST"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_delete_forwards_id() {
    let api = InMemoryOrdersApi::with_orders(vec![order(1), order(2)]);

    let response = in_memory_app(&api)
        .oneshot(delete("/api/orders/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(api.calls(), vec![ApiCall::Delete("2".to_string())]);
    assert_eq!(api.orders(), vec![order(1)]);
}

#[tokio::test]
async fn test_delete_missing_order_passes_404_through() {
    let api = InMemoryOrdersApi::with_orders(vec![order(1)]);

    let response = in_memory_app(&api)
        .oneshot(delete("/api/orders/9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], json!("UPSTREAM_STATUS"));
}

#[tokio::test]
async fn test_delete_reencodes_id_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/orders/ord%2F7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = upstream_app(&server)
        .oneshot(delete("/api/orders/ord%2F7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_dashboard_settings_served_from_config() {
    let mut config = Config::default();
    config.dashboard.per_page = 10;
    config.dashboard.greeting_name = "Marta".to_string();
    let app = build_router(AppState::with_orders(
        config,
        Arc::new(InMemoryOrdersApi::new()),
    ));

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["per_page"], json!(10));
    assert_eq!(body["greeting_name"], json!("Marta"));
    assert_eq!(body["toast_seconds"], json!(4));
    assert_eq!(body["currency"]["base"], json!("PLN"));
}

#[tokio::test]
async fn test_unknown_paths_serve_the_bundle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>orderdesk</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let mut config = Config::default();
    config.server.static_dir = dir.path().to_path_buf();
    let app = build_router(AppState::with_orders(
        config,
        Arc::new(InMemoryOrdersApi::new()),
    ));

    let script = app.clone().oneshot(get("/app.js")).await.unwrap();
    let page = app.oneshot(get("/orders/anything")).await.unwrap();

    assert_eq!(script.status(), StatusCode::OK);
    let bytes = to_bytes(script.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"console.log(1)");

    assert_eq!(page.status(), StatusCode::OK);
    let bytes = to_bytes(page.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<html>orderdesk</html>");
}
