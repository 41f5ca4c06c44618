//! The typed request client
//!
//! Assembles the URL, headers, and body described by a
//! [`RequestDescriptor`], executes it over the configured transport,
//! and decodes the JSON response. Stateless apart from the resolved
//! base address.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RequestError, Result};
use crate::request::{Method, RequestDescriptor};
use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};

/// Base address used when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api/v1";

/// Environment variable that overrides the base address
pub const BASE_URL_ENV: &str = "API_URL";

/// Typed JSON client bound to a base address
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a client against an explicit base address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::default()))
    }

    /// Create a client with an injected transport
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into();
        tracing::debug!("Created ApiClient for {}", base_url);
        Self {
            base_url,
            transport,
        }
    }

    /// Create a client from the process environment: `API_URL` if set
    /// and non-empty, else [`DEFAULT_BASE_URL`]. Intended for the
    /// composition boundary; call sites receive the resolved client.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(std::env::var(BASE_URL_ENV).ok()))
    }

    /// The configured base address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request and decode the JSON response into `T`.
    ///
    /// A single attempt; any failure is logged and normalized into
    /// [`RequestError`].
    pub async fn request<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let result = self.execute(&descriptor).await;
        if let Err(e) = &result {
            tracing::error!(
                "API request error: {} {}: {}",
                descriptor.method,
                descriptor.endpoint,
                e
            );
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<T> {
        let url = self.build_url(descriptor)?;
        let headers = merge_headers(&descriptor.headers);
        let body = if descriptor.method.allows_body() {
            descriptor.body.as_ref().map(Value::to_string)
        } else {
            None
        };

        let response = self
            .transport
            .execute(descriptor.method, url.as_str(), &headers, body)
            .await?;

        if !response.is_success() {
            return Err(RequestError::new(failure_message(&response)));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| RequestError::new(format!("Invalid JSON response: {}", e)))
    }

    fn build_url(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Url> {
        let joined = format!("{}{}", self.base_url, descriptor.endpoint);
        let mut url = reqwest::Url::parse(&joined)
            .map_err(|e| RequestError::new(format!("Invalid URL {}: {}", joined, e)))?;

        if !descriptor.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &descriptor.params {
                pairs.append_pair(key, &value.to_string());
            }
        }
        Ok(url)
    }

    /// `GET endpoint`
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(RequestDescriptor::new(Method::Get, endpoint))
            .await
    }

    /// `POST endpoint` with an optional JSON body
    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Option<Value>) -> Result<T> {
        let mut descriptor = RequestDescriptor::new(Method::Post, endpoint);
        if let Some(body) = body {
            descriptor = descriptor.body(body);
        }
        self.request(descriptor).await
    }

    /// `PUT endpoint` with an optional JSON body
    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str, body: Option<Value>) -> Result<T> {
        let mut descriptor = RequestDescriptor::new(Method::Put, endpoint);
        if let Some(body) = body {
            descriptor = descriptor.body(body);
        }
        self.request(descriptor).await
    }

    /// `PATCH endpoint` with an optional JSON body
    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, body: Option<Value>) -> Result<T> {
        let mut descriptor = RequestDescriptor::new(Method::Patch, endpoint);
        if let Some(body) = body {
            descriptor = descriptor.body(body);
        }
        self.request(descriptor).await
    }

    /// `DELETE endpoint`
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(RequestDescriptor::new(Method::Delete, endpoint))
            .await
    }
}

/// Resolve the base address from an optional environment value
fn resolve_base_url(env_value: Option<String>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Merge caller headers over the defaults; caller wins on a
/// case-insensitive name collision.
fn merge_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    for (name, value) in caller {
        if let Some(existing) = headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            existing.1 = value.clone();
        } else {
            headers.push((name.clone(), value.clone()));
        }
    }
    headers
}

/// Error message for a non-2xx response: the JSON body's `message`
/// field when present, else a generic fallback from the status text.
fn failure_message(response: &RawResponse) -> String {
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("API Error: {}", response.status_text))
}
