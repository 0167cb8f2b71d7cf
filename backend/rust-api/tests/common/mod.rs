#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use languagebuddy_api::{
    config::{Config, GatewayConfig},
    create_router,
    services::AppState,
};

pub const TEST_API_KEY: &str = "test-gateway-key";
pub const METRICS_AUTH: &str = "metrics:secret";

pub fn test_config(gateway_url: &str, api_key: Option<&str>) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        gateway: GatewayConfig {
            url: gateway_url.to_string(),
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
            max_tokens: 1024,
            temperature: 0.7,
            timeout_secs: 5,
        },
        metrics_auth: METRICS_AUTH.to_string(),
    }
}

/// Router wired to a real HTTP gateway client pointed at `gateway_url`.
pub fn create_test_app(gateway_url: &str, api_key: Option<&str>) -> Router {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let state = AppState::new(test_config(gateway_url, api_key))
        .expect("Failed to initialize test app state");
    create_router(Arc::new(state))
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Response body is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

pub fn assert_cors_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let allowed = headers
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .expect("missing access-control-allow-headers");
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
    assert!(allowed.contains("x-client-info"));
}
