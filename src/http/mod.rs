//! HTTP transport module
//!
//! Performs a single authenticated GET against an endpoint with query
//! parameters and returns the decoded `content` payload.
//!
//! # Features
//!
//! - **Credential Injection**: `appid`/`appkey` appended to every request
//! - **Status Mapping**: non-200 responses carry status, endpoint, and body
//! - **Content Unwrapping**: the top-level `content` field is returned
//! - **Fetcher Agnostic**: the [`Transport`] trait is the seam the search
//!   aggregator drives; [`HttpTransport`] is the reqwest-backed default

mod transport;

pub use transport::{Credentials, HttpTransport, Transport, TransportConfig, DEFAULT_BASE_URL};
