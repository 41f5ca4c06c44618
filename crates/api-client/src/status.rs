//! Health status response shape
//!
//! Mirrors the JSON served by the backend's `/health/status` route.

use serde::{Deserialize, Serialize};

/// Health report as returned by `GET {base}/health/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Short status token, e.g. "ok"
    pub status: String,
    /// Human-readable description
    pub message: String,
    /// ISO-8601 timestamp generated by the backend at response time
    pub timestamp: String,
}
