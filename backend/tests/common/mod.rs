//! Shared helpers for the backend integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use early_warning_backend::{
    config::{CorsConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig},
    create_app, AppState, Config,
};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;

/// Test configuration pointing at a port nothing listens on
pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost:1/early_warning_unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
            run_migrations: false,
        },
        logging: LoggingConfig {
            format: LogFormat::Pretty,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

/// Router over the given pool
pub fn build_test_app(pool: PgPool) -> Router {
    create_app(AppState {
        db: pool,
        config: Arc::new(test_config()),
    })
}

/// Router backed by a pool that never connects
pub fn offline_app() -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_lazy(&config.database.url)
        .unwrap();

    build_test_app(pool)
}

/// Raw response parts
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Body as JSON, or as a JSON string when it is not JSON
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Send an optional JSON body and decode the JSON reply
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = match body {
        Some(body) => {
            send_raw(app, method, uri, Some("application/json"), Some(body.to_string())).await
        }
        None => send_raw(app, method, uri, None, None).await,
    };
    (response.status, response.json())
}

pub fn error_field(body: &Value) -> Option<&str> {
    body["error"]["field"].as_str()
}

pub fn error_code(body: &Value) -> Option<&str> {
    body["error"]["code"].as_str()
}
