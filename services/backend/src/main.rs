//! Backend CLI
//!
//! Serves the statusboard health API.

use backend::BackendConfig;
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "backend")]
#[command(about = "Statusboard health check API service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = BackendConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::debug!(
        "Resolved config: port={}, frontend_origin={}",
        config.port,
        config.frontend_origin
    );

    backend::run(config).await
}
