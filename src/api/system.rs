use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{AppState, HealthLiveResponse, HealthReadyResponse};

/// `GET /`
pub async fn greeting(State(state): State<Arc<AppState>>) -> String {
    format!("Hello {}!", state.config().server.greeting_name)
}

/// `GET /health/live`
///
/// Lightweight liveness probe to indicate the process is running.
pub async fn health_live(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthLiveResponse {
        status: "alive",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /health/ready`
///
/// Readiness probe that checks database connectivity.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let database = state.products().ping().await.is_ok();

    let (status, label) = if database {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(HealthReadyResponse {
            status: label,
            database,
        }),
    )
        .into_response()
}
