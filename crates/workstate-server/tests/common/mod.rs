#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use workstate_core::{AccountService, PasswordHasher, TokenIssuer};
use workstate_server::{restapi::create_router, AppState};
use workstate_store::MemoryStore;

pub const TEST_SECRET: &str = "test-secret";

pub struct TestContext {
    pub router: Router,
    pub issuer: TokenIssuer,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_login_ttl(Duration::minutes(30))
    }

    pub fn with_login_ttl(login_ttl: Duration) -> Self {
        let issuer = TokenIssuer::hs256(TEST_SECRET).expect("issuer");
        let accounts = AccountService::new(
            Arc::new(MemoryStore::new()),
            PasswordHasher::new(8).expect("hasher"),
            issuer.clone(),
            login_ttl,
        );
        let router = create_router(AppState::new(accounts));
        Self { router, issuer }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse { status, headers, body }
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.post_json("/register", &serde_json::json!({"email": email, "password": password}))
            .await
    }
}
