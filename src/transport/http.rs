//! HTTP transport implementation
//!
//! This module handles the network side of every reap and sow:
//! - Building HTTP clients with a descriptive user agent string
//! - Executing the reaper's requests with reqwest
//! - Classifying failures into `TransportError`

use crate::config::{Config, HttpConfig, UserAgentConfig};
use crate::transport::{Request, Transport};
use crate::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use reddit_reaper::config::{HttpConfig, UserAgentConfig};
/// use reddit_reaper::transport::build_http_client;
///
/// let user_agent = UserAgentConfig {
///     bot_name: "harvest-bot".to_string(),
///     bot_version: "0.1.0".to_string(),
///     contact: "https://example.com/bot".to_string(),
/// };
///
/// let client = build_http_client(&user_agent, &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    // Format: BotName/Version (+Contact)
    let agent = format!(
        "{}/{} (+{})",
        user_agent.bot_name, user_agent.bot_version, user_agent.contact
    );

    Client::builder()
        .user_agent(agent)
        .timeout(Duration::from_secs(http.timeout))
        .connect_timeout(Duration::from_secs(http.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// A transport that executes requests over HTTP with reqwest
///
/// Any non-2xx status is reported as `TransportError::Status`. There are no
/// retries; callers decide what to do with a failure.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the user agent and HTTP sections of a config
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let client = build_http_client(&config.user_agent, &config.http)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Vec<u8>, TransportError> {
        let url = request.url();
        let target = Url::parse(&url).map_err(|source| TransportError::InvalidUrl {
            url: url.clone(),
            source,
        })?;

        tracing::debug!("{} {}", request.method, url);

        let response = self
            .client
            .request(request.method, target)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|source| TransportError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request to {} returned status {}", url, status);
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Http { url, source })?;

        Ok(body.to_vec())
    }
}
