//! API routes: root descriptor and health checks

use axum::http::header::InvalidHeaderValue;
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::config::BackendConfig;

/// Body served by `/api/v1/health/status`
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Build the API router with the CORS layer for the frontend origin
pub fn build_router(config: &BackendConfig) -> Result<Router, InvalidHeaderValue> {
    let origin: HeaderValue = config.frontend_origin.parse()?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/health/status", get(status_handler))
        .layer(cors))
}

/// ISO-8601 timestamp with millisecond precision, e.g.
/// `2024-01-01T00:00:00.000Z`
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Statusboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "api": "/api/v1",
        "documentation": {
            "health": "/api/v1/health",
            "status": "/api/v1/health/status",
        },
        "timestamp": now_iso(),
    }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn status_handler() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        message: "Backend API is running".to_string(),
        timestamp: now_iso(),
    })
}
