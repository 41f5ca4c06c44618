//! Configuration for the backend service

/// Resolved backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Port to listen on
    pub port: u16,
    /// Origin allowed by the CORS layer (the frontend's address)
    pub frontend_origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_origin: default_frontend_origin(),
        }
    }
}

impl BackendConfig {
    /// Resolve configuration from the process environment:
    /// `PORT` and `FRONTEND_URL`, with defaults for the local setup.
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(std::env::var("PORT").ok()),
            frontend_origin: std::env::var("FRONTEND_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(default_frontend_origin),
        }
    }
}

fn default_port() -> u16 {
    3001
}

fn default_frontend_origin() -> String {
    "http://localhost:3000".to_string()
}

fn resolve_port(env_value: Option<String>) -> u16 {
    match env_value.as_deref().map(str::parse) {
        Some(Ok(port)) => port,
        Some(Err(_)) => {
            tracing::warn!(
                "Ignoring unparseable PORT value {:?}, using {}",
                env_value,
                default_port()
            );
            default_port()
        }
        None => default_port(),
    }
}
