//! Frontend CLI
//!
//! Serves the server-rendered status dashboard.

use std::sync::Arc;

use api_client::ApiClient;
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Statusboard server-rendered health dashboard")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Backend base address (overrides the API_URL environment variable)
    #[arg(long)]
    api_url: Option<String>,

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

    let client = match args.api_url {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    };
    tracing::debug!("Using backend base address {}", client.base_url());

    frontend::run(args.port, Arc::new(client)).await
}
