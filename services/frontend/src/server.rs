//! Dashboard HTTP server
//!
//! `GET /` seeds the view state from a live status load and renders
//! the page; `POST /refresh` drives the state machine through one
//! refresh and returns the resulting view state as JSON.

use std::sync::Arc;

use api_client::ApiClient;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dashboard::{self, DashboardViewState, ViewStateHandle};
use crate::loader::{self, InitialStatus};
use crate::page;

/// Dashboard application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub view: ViewStateHandle,
}

/// Build the dashboard axum router
pub fn build_router(client: Arc<ApiClient>) -> Router {
    // Placeholder until the first page render seeds real data
    let view = dashboard::new_view_handle(InitialStatus {
        data: None,
        error: Some("Status has not been loaded yet".to_string()),
    });

    let state = AppState { client, view };

    Router::new()
        .route("/", get(index_handler))
        .route("/refresh", post(refresh_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn index_handler(State(app): State<AppState>) -> impl IntoResponse {
    let initial = loader::load_initial_status(&app.client).await;

    let view = {
        let mut guard = app.view.write().await;
        *guard = DashboardViewState::seeded(initial);
        guard.clone()
    };

    Html(page::render_page(&view))
}

async fn refresh_handler(State(app): State<AppState>) -> impl IntoResponse {
    let view = dashboard::refresh(&app.view, &app.client).await;
    Json(view)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use backend::BackendConfig;
    use tower::ServiceExt;

    /// Serve the real backend router on an ephemeral port and return
    /// a client pointed at its API prefix.
    async fn live_backend_client() -> Arc<ApiClient> {
        let router = backend::build_router(&BackendConfig::default()).unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Arc::new(ApiClient::new(format!("http://{}/api/v1", addr)))
    }

    fn unreachable_client() -> Arc<ApiClient> {
        Arc::new(ApiClient::new("http://127.0.0.1:1/api/v1"))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = build_router(unreachable_client());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_renders_success_panel_from_live_backend() {
        let app = build_router(live_backend_client().await);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Statusboard"));
        assert!(html.contains("Backend is running"));
        assert!(html.contains("Backend API is running"));
        assert!(!html.contains("Connection Error"));
    }

    #[tokio::test]
    async fn index_renders_error_panel_when_backend_is_down() {
        let app = build_router(unreachable_client());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Page production still succeeds
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Connection Error"));
        assert!(html.contains("http://localhost:3001"));
    }

    #[tokio::test]
    async fn refresh_returns_updated_view_state_json() {
        let app = build_router(live_backend_client().await);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["loading"], false);
        assert_eq!(json["status"]["status"], "ok");
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn refresh_recovers_state_after_seeded_error() {
        let client = live_backend_client().await;
        let router = {
            let view = dashboard::new_view_handle(InitialStatus {
                data: None,
                error: Some("Failed to connect to backend".to_string()),
            });
            let state = AppState {
                client,
                view,
            };
            Router::new()
                .route("/refresh", post(refresh_handler))
                .with_state(state)
        };

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"]["message"], "Backend API is running");
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn refresh_reports_backend_failure_as_view_error() {
        let app = build_router(unreachable_client());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["loading"], false);
        assert_eq!(json["status"], serde_json::Value::Null);
        assert!(json["error"].as_str().unwrap().contains("failed"));
    }
}
