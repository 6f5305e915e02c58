//! Transport implementation
//!
//! A thin GET-only client: build the URL, append credentials and query
//! parameters, send, map the status, unwrap `content`. No retries; a failed
//! request surfaces to the caller unchanged.

use crate::error::{Error, Result};
use crate::types::{Envelope, JsonValue};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default base URL of the Plays.tv data API
pub const DEFAULT_BASE_URL: &str = "https://api.plays.tv/data/v1";

/// Application credentials.
///
/// Opaque strings handed out by the platform; they are appended to every
/// outgoing request as the `appid` and `appkey` query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application identifier
    pub app_id: String,
    /// Application key
    pub app_key: String,
}

impl Credentials {
    /// Create credentials from an app id / app key pair
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }
}

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("playstv/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Create a new config builder
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }
}

/// Builder for transport config
#[derive(Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> TransportConfig {
        self.config
    }
}

/// The fetcher seam driven by the search aggregator.
///
/// One authenticated GET per call; the implementation owns credential
/// injection and returns the decoded `content` payload.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET against `endpoint` with the given query parameters
    /// and return the `content` field of the response body.
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<JsonValue>;
}

/// reqwest-backed [`Transport`]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport with the default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, TransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(credentials: Credentials, config: TransportConfig) -> Result<Self> {
        // Trailing slash would make Url::join drop the version segment
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Build the full request URL for an endpoint path
    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<JsonValue> {
        let url = self.build_url(endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[
                ("appid", self.credentials.app_id.as_str()),
                ("appkey", self.credentials.app_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), endpoint, body));
        }

        debug!("GET {} succeeded", endpoint);

        let envelope: Envelope<JsonValue> = response
            .json()
            .await
            .map_err(|e| Error::decode(endpoint, e.to_string()))?;

        Ok(envelope.content)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("app_id", &self.credentials.app_id)
            .finish_non_exhaustive()
    }
}
