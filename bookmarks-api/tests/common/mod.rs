//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - An in-memory router with a known configuration
//! - Test user signup
//! - Request/response helpers

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bookmarks_api::app::{build_router, AppState};
use bookmarks_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use bookmarks_shared::store::memory::MemoryStore;
use serde_json::Value;
use tower::Service as _;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Test context containing all necessary resources
pub struct TestContext {
    pub app: Router,
    pub config: Config,
    pub email: String,
    pub access_token: String,
}

impl TestContext {
    /// Builds a fresh app over an empty store and signs up one user
    pub async fn new() -> Self {
        let config = test_config();
        let app = build_router(AppState::new(MemoryStore::new(), config.clone()));

        let mut ctx = TestContext {
            app,
            config,
            email: String::new(),
            access_token: String::new(),
        };

        let email = format!("test-{}@example.com", Uuid::new_v4());
        ctx.access_token = ctx.signup(&email, "123").await;
        ctx.email = email;
        ctx
    }

    /// Signs up another user on the same app, returning their token
    pub async fn signup(&mut self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/auth/signup",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
        body["access_token"]
            .as_str()
            .expect("access_token in signup response")
            .to_string()
    }

    /// Returns authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Sends a request and returns the status plus the JSON body
    ///
    /// An empty body comes back as `Value::Null`.
    pub async fn send(
        &mut self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    /// Sends a request as the context's own user
    pub async fn send_authed(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let token = self.access_token.clone();
        self.send(method, uri, Some(&token), body).await
    }
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
            production: false,
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            expiration_minutes: 15,
        },
    }
}
