//! In-process HTTP harness for route tests.
//!
//! Builds the same router `main` serves, backed by a fresh in-memory store,
//! and drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::adapters::InMemoryStore;
use crate::config::{AppConfig, Environment};
use crate::{build_router, AppState};

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig {
            environment: Environment::Testing,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(InMemoryStore::new()), config);
        Self {
            router: build_router(state, CorsLayer::permissive()),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    /// DELETE returns no body on success, so only the status is reported.
    pub async fn delete(&self, uri: &str) -> StatusCode {
        self.send(Method::DELETE, uri, None).await.0
    }

    /// POST a raw body, optionally without a content type
    pub async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: &str) -> StatusCode {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.router.clone().oneshot(request).await.unwrap().status()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "testing");
}

#[tokio::test]
async fn test_openapi_served() {
    let app = TestApp::new();
    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "PromptLab API");
}
