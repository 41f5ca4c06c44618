//! Statusboard backend - health check API service
//!
//! Serves a root descriptor and the `/api/v1/health` routes, with
//! CORS opened for the frontend's origin.

pub mod config;
pub mod routes;

pub use config::BackendConfig;
pub use routes::build_router;

use std::net::SocketAddr;

/// Bind and serve the API until ctrl-c
pub async fn run(config: BackendConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = build_router(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Backend API is running on http://localhost:{}/api/v1",
        config.port
    );

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
