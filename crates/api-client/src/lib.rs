//! Typed JSON REST client for the statusboard backend API
//!
//! Builds requests against a configured base address, executes them,
//! and decodes JSON responses. All failures are normalized into a
//! single [`RequestError`] carrying a human-readable message.

pub mod client;
pub mod error;
pub mod request;
pub mod status;
pub mod transport;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{RequestError, Result};
pub use request::{Method, ParamValue, RequestDescriptor};
pub use status::StatusResponse;
