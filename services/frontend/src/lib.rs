//! Statusboard frontend - server-rendered health dashboard
//!
//! Renders the backend's health status on page load and drives a
//! user-triggered refresh through the dashboard state machine.

pub mod dashboard;
pub mod loader;
pub mod page;
pub mod server;

pub use dashboard::{DashboardViewState, ViewStateHandle};
pub use loader::{load_initial_status, InitialStatus};
pub use server::build_router;

use std::net::SocketAddr;
use std::sync::Arc;

use api_client::ApiClient;

/// Bind and serve the dashboard until ctrl-c
pub async fn run(port: u16, client: Arc<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
    let router = build_router(client);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Dashboard is running on http://localhost:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
