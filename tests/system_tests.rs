//! Integration tests for the greeting, health and store-failure paths.

mod common;

use axum::http::StatusCode;
use common::{get, json_request, send, send_json, spawn_app, spawn_app_with};
use product_catalog::config::Config;
use product_catalog::models::product::{Product, ProductInput};
use product_catalog::services::{ProductError, ProductService};
use product_catalog::state::SharedState;
use std::sync::Arc;

#[tokio::test]
async fn test_greeting_defaults_to_world() {
    let app = spawn_app().await;

    let (status, body) = send(&app.router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"Hello World!");
}

#[tokio::test]
async fn test_greeting_uses_configured_name() {
    let app = spawn_app_with(|config| {
        config
            .apply_env_overrides(|key| (key == "NAME").then(|| "Bangkok".to_string()))
            .unwrap();
    })
    .await;

    let (_, body) = send(&app.router, get("/")).await;
    assert_eq!(&body[..], b"Hello Bangkok!");
}

#[tokio::test]
async fn test_health_probes() {
    let app = spawn_app().await;

    let (status, body) = send_json(&app.router, get("/health/live")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = send_json(&app.router, get("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = spawn_app().await;
    let (status, _) = send(&app.router, get("/metrics")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_upload_is_404() {
    let app = spawn_app().await;
    let (status, _) = send(&app.router, get("/uploads/does-not-exist.png")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// A store whose every operation fails, standing in for a broken database.
struct FailingStore;

const FAILURE: &str = "SQLITE_CANTOPEN: unable to open database file";

#[async_trait::async_trait]
impl ProductService for FailingStore {
    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }

    async fn get(&self, _id: i32) -> Result<Product, ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }

    async fn create(&self, _input: ProductInput) -> Result<Product, ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }

    async fn update(&self, _id: i32, _input: ProductInput) -> Result<u64, ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }

    async fn delete(&self, _id: i32) -> Result<u64, ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }

    async fn ping(&self) -> Result<(), ProductError> {
        Err(ProductError::Storage(FAILURE.to_string()))
    }
}

fn failing_router() -> axum::Router {
    let mut config = Config::default();
    config.uploads.directory = std::env::temp_dir()
        .join(format!("catalog-failing-{}", uuid::Uuid::new_v4()))
        .display()
        .to_string();

    let shared = SharedState::with_product_service(config, Arc::new(FailingStore));
    let state = product_catalog::api::create_app_state(Arc::new(shared), None);
    product_catalog::api::router(state)
}

#[tokio::test]
async fn test_store_failures_surface_as_500_with_raw_message() {
    let router = failing_router();

    let requests = vec![
        get("/products"),
        get("/products/1"),
        json_request("POST", "/products", &serde_json::json!({"name": "Mango"})),
        json_request("PUT", "/products/1", &serde_json::json!({"name": "Mango"})),
        common::delete("/products/1"),
    ];

    for request in requests {
        let (status, body) = send_json(&router, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], FAILURE);
    }
}

#[tokio::test]
async fn test_readiness_reports_unavailable_store() {
    let router = failing_router();

    let (status, body) = send_json(&router, get("/health/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], false);
}
