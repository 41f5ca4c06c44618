//! Initial status load, run once per page render
//!
//! Failure is represented as data so page production always succeeds,
//! even when the backend is unreachable.

use api_client::{ApiClient, StatusResponse};

/// Result of the initial status load; exactly one side is populated.
#[derive(Debug, Clone)]
pub struct InitialStatus {
    pub data: Option<StatusResponse>,
    pub error: Option<String>,
}

/// Fetch the backend's health status to seed the dashboard.
///
/// Always hits the live backend; there is no cache layer. Never
/// propagates a fault.
pub async fn load_initial_status(client: &ApiClient) -> InitialStatus {
    match client.get::<StatusResponse>("/health/status").await {
        Ok(data) => InitialStatus {
            data: Some(data),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Initial status load failed: {}", e);
            InitialStatus {
                data: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_status_server() -> String {
        let router = Router::new().route(
            "/health/status",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "message": "Backend API is running",
                    "timestamp": "2024-01-01T00:00:00.000Z",
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn running_backend_seeds_data() {
        let base = spawn_status_server().await;
        let client = ApiClient::new(base);

        let initial = load_initial_status(&client).await;
        let data = initial.data.unwrap();
        assert_eq!(data.status, "ok");
        assert_eq!(data.message, "Backend API is running");
        assert!(initial.error.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_becomes_an_error_value() {
        let client = ApiClient::new("http://127.0.0.1:1/api/v1");

        let initial = load_initial_status(&client).await;
        assert!(initial.data.is_none());
        let error = initial.error.unwrap();
        assert!(!error.is_empty());
    }
}
