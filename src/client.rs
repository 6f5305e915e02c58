//! The public Plays.tv client
//!
//! A thin facade over the transport and the search aggregator. Every
//! endpoint is a named method; errors surface exactly as the failing
//! stage raised them.

use crate::error::Result;
use crate::http::{Credentials, HttpTransport, Transport, TransportConfig};
use crate::search::{self, SearchFilters, SearchOptions};
use crate::types::{JsonValue, UserRecord, VideoRecord};

/// Configuration for a [`PlaysTv`] client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application credentials
    pub credentials: Credentials,
    /// Transport settings (base URL, timeout, user agent)
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Create a config with the default transport settings
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(app_id, app_key),
            transport: TransportConfig::default(),
        }
    }

    /// Override the API base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.transport.base_url = url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }
}

/// Client for the Plays.tv REST API
#[derive(Debug)]
pub struct PlaysTv {
    transport: HttpTransport,
}

impl PlaysTv {
    /// Create a client against the production API
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(app_id, app_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config.credentials, config.transport)?;
        Ok(Self { transport })
    }

    /// Verify the app id and key given at construction.
    ///
    /// Returns the `content` payload of `/auth/verify` on success.
    pub async fn verify(&self) -> Result<JsonValue> {
        self.transport.get("/auth/verify", &[]).await
    }

    /// Get the user with the given username.
    ///
    /// An unknown user surfaces as `HttpStatus { status: 404, .. }` with the
    /// `/users/{username}` endpoint attached.
    pub async fn user(&self, username: &str) -> Result<UserRecord> {
        self.transport.get(&format!("/users/{username}"), &[]).await
    }

    /// Search videos matching `filters`, resolving pagination automatically.
    ///
    /// See [`search::search`] for the pagination and ordering guarantees.
    pub async fn search_videos(
        &self,
        filters: &SearchFilters,
        options: SearchOptions,
    ) -> Result<Vec<VideoRecord>> {
        search::search(&self.transport, filters, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_client_creation() {
        let client = PlaysTv::new("my-app", "my-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_config_overrides() {
        let config = ClientConfig::new("my-app", "my-key")
            .base_url("http://localhost:9999")
            .timeout(std::time::Duration::from_secs(2));

        assert_eq!(config.transport.base_url, "http://localhost:9999");
        assert_eq!(config.transport.timeout, std::time::Duration::from_secs(2));
        assert!(PlaysTv::with_config(config).is_ok());
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let config = ClientConfig::new("my-app", "my-key").base_url("::::");
        assert!(matches!(
            PlaysTv::with_config(config),
            Err(Error::InvalidUrl(_))
        ));
    }
}
