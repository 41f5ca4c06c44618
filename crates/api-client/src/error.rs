//! Error type for API requests

/// A failed API request.
///
/// Transport failures, non-2xx responses, and JSON decode failures are
/// all collapsed into this one carrier; callers only see the message
/// text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for API client operations
pub type Result<T> = std::result::Result<T, RequestError>;
