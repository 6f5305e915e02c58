//! Error types for the Plays.tv client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Errors propagate to the caller unmodified: there is no retry and no
//! wrapping beyond what the failing stage already attached.

use thiserror::Error;

/// The main error type for the Plays.tv client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Usage error: {message}")]
    Usage { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} on {endpoint}: {body}")]
    HttpStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl Error {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            endpoint: endpoint.into(),
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Check if this error was raised before any network call was issued
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }

    /// The HTTP status code, if the backend answered with a non-200 status
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the Plays.tv client
pub type Result<T> = std::result::Result<T, Error>;
