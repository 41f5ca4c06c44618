//! HTTP transport abstraction for testability

use async_trait::async_trait;

use crate::request::Method;

/// Raw HTTP response from a transport
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    /// Whether the status code indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP transport for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Execute a fully prepared request and return the raw response.
    /// A single attempt; no retries.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> crate::Result<RawResponse>;
}

/// Production transport using reqwest
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> crate::Result<RawResponse> {
        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(to_reqwest_method(method), url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| crate::RequestError::new(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        let body = response
            .text()
            .await
            .map_err(|e| crate::RequestError::new(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
