//! Reaper module: the rate-limited core
//!
//! This module contains the request core, including:
//! - `Scheme` derivation from the TLS flag
//! - Query and form encoding of request values
//! - Rate limiting shared by every caller of one reaper
//! - Harvesting responses through the injected parser

mod rate;
mod request;

pub use rate::RateLimiter;
pub use request::{build_reap_request, build_sow_request, encode_values, FORM_CONTENT_TYPE};

use crate::config::Config;
use crate::data::{Harvest, Parser};
use crate::transport::{HttpTransport, Transport};
use crate::{ReapResult, TransportError};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;

/// Request parameters: query parameters for reaps, form fields for sows
///
/// Keys are encoded in sorted order.
pub type Values = BTreeMap<String, String>;

/// URL scheme used for every request a reaper sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// "https" when TLS is enabled, "http" otherwise
    pub fn from_tls(tls: bool) -> Self {
        if tls {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to build a [`Reaper`]
#[derive(Debug, Clone)]
pub struct ReaperOptions<T, P> {
    /// Executes requests
    pub transport: T,

    /// Decodes reap responses
    pub parser: P,

    /// Host every request is sent to, optionally with a port
    pub hostname: String,

    /// Use https instead of http
    pub tls: bool,

    /// Suffix endpoint helpers append to read paths (e.g. ".json")
    pub path_suffix: String,

    /// Minimum time between dispatches; zero means unlimited
    pub minimum_interval: Duration,
}

/// A rate-limited harvester bound to a single host
///
/// One reaper is meant to be shared by every handler of a bot session, e.g.
/// behind an `Arc`. Requests sent through the same reaper are dispatched at
/// least `minimum_interval` apart; separate reapers do not affect each other.
#[derive(Debug)]
pub struct Reaper<T, P> {
    transport: T,
    parser: P,
    hostname: String,
    scheme: Scheme,
    path_suffix: String,
    limiter: RateLimiter,
}

impl<T, P> Reaper<T, P>
where
    T: Transport,
    P: Parser,
{
    /// Creates a reaper
    ///
    /// Performs no validation and no I/O. The first request never waits.
    pub fn new(options: ReaperOptions<T, P>) -> Self {
        Self {
            transport: options.transport,
            parser: options.parser,
            hostname: options.hostname,
            scheme: Scheme::from_tls(options.tls),
            path_suffix: options.path_suffix,
            limiter: RateLimiter::new(options.minimum_interval),
        }
    }

    /// Reads `path` and parses the response into a harvest
    ///
    /// # Arguments
    ///
    /// * `path` - Path on the host; empty for the host root. The path suffix is
    ///   not appended here.
    /// * `values` - Query parameters
    ///
    /// # Returns
    ///
    /// * `Ok(Harvest)` - The parser's records, in the parser's order
    /// * `Err(ReapError)` - The transport's or the parser's error, unchanged
    pub async fn reap(&self, path: &str, values: &Values) -> ReapResult<Harvest> {
        self.limiter.acquire().await;

        let request = build_reap_request(self.scheme, &self.hostname, path, values);
        tracing::debug!("Reaping {}", request.url());

        let blob = self.transport.execute(request).await?;
        let (comments, posts, messages) = self.parser.parse(&blob)?;

        tracing::debug!(
            "Harvested {} comments, {} posts, {} messages from {}",
            comments.len(),
            posts.len(),
            messages.len(),
            path
        );

        Ok(Harvest {
            comments,
            posts,
            messages,
        })
    }

    /// Writes `values` as a form to `path`
    ///
    /// The response body is discarded; the parser is never consulted.
    pub async fn sow(&self, path: &str, values: &Values) -> Result<(), TransportError> {
        self.limiter.acquire().await;

        let request = build_sow_request(self.scheme, &self.hostname, path, values);
        tracing::debug!(
            "Sowing {} ({} bytes)",
            request.url(),
            request.content_length()
        );

        self.transport.execute(request).await?;
        Ok(())
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Suffix endpoint helpers should append to read paths
    pub fn path_suffix(&self) -> &str {
        &self.path_suffix
    }

    pub fn minimum_interval(&self) -> Duration {
        self.limiter.minimum_interval()
    }

    /// Dispatch time of the most recent reap or sow, `None` before the first one
    pub async fn last_request_time(&self) -> Option<Instant> {
        self.limiter.last_request_time().await
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}

impl<P: Parser> Reaper<HttpTransport, P> {
    /// Builds an HTTP-backed reaper from a loaded configuration
    ///
    /// # Arguments
    ///
    /// * `config` - A validated configuration
    /// * `parser` - Parser for reap responses
    ///
    /// # Returns
    ///
    /// * `Ok(Reaper)` - Ready to use; no request has been sent
    /// * `Err(TransportError)` - The HTTP client could not be built
    pub fn from_config(config: &Config, parser: P) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;

        Ok(Self::new(ReaperOptions {
            transport,
            parser,
            hostname: config.reaper.hostname.clone(),
            tls: config.reaper.tls,
            path_suffix: config.reaper.path_suffix.clone(),
            minimum_interval: config.reaper.minimum_interval(),
        }))
    }
}
