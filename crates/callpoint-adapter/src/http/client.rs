/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{CallpointError, Result};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

/// Default base URL for a locally deployed tasking server
const DEFAULT_BASE_URL: &str = "https://127.0.0.1:7443";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_token: String,
    pub operator: String,
}

/// Main HTTP client for the tasking server API
#[derive(Debug)]
pub struct CallpointClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl CallpointClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    ///
    /// This is also the injection point for tests that point the client at a
    /// wiremock server.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build full URL for an API endpoint
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a request builder with request id and auth headers applied
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        let mut builder = self
            .http_client
            .request(method, url)
            .header("x-request-id", Uuid::new_v4().to_string());

        if let Some(credentials) = &self.credentials {
            builder = builder.bearer_auth(&credentials.api_token);
        }

        Ok(builder)
    }

    /// Send a request and decode the JSON body into `T`
    ///
    /// Non-2xx statuses become `CallpointError::Api` carrying the raw body as
    /// the message.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, bytes = body.len(), "api response received");

        if !status.is_success() {
            return Err(CallpointError::api_error(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
