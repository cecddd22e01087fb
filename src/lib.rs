//! Reddit-Reaper: a polite, rate-limited harvester for a single remote host
//!
//! This crate implements the request core a bot sits on: it reads ("reaps") and
//! writes ("sows") against one host, keeps a minimum spacing between requests,
//! and hands response bodies to an injected parser that produces typed records.

pub mod config;
pub mod data;
pub mod logging;
pub mod reaper;
pub mod transport;

use thiserror::Error;

/// Errors surfaced by a [`transport::Transport`]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Errors surfaced by a [`data::Parser`]
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

/// Error returned by [`reaper::Reaper::reap`]
///
/// Both variants are transparent: the reaper adds nothing to what its
/// transport or parser reported.
#[derive(Debug, Error)]
pub enum ReapError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid hostname in config: {0}")]
    InvalidHostname(String),
}

/// Result type alias for reap operations
pub type ReapResult<T> = std::result::Result<T, ReapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use data::{Comment, Harvest, Message, Parser, Post};
pub use reaper::{Reaper, ReaperOptions, Scheme, Values};
pub use transport::{HttpTransport, Request, Transport};
