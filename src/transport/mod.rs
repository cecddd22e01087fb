//! Transport module for dispatching requests
//!
//! This module contains the seam between the reaper and the network:
//! - The `Request` the reaper builds for every reap and sow
//! - The `Transport` trait that executes a request and returns the raw body
//! - `HttpTransport`, a reqwest-backed implementation

mod http;
mod request;

pub use http::{build_http_client, HttpTransport};
pub use request::Request;

use crate::TransportError;
use async_trait::async_trait;

/// Trait for transport implementations
///
/// A transport executes a fully formed request and returns the response body.
/// Retry, redirect and connection pooling policy belong to the implementation;
/// the reaper imposes none.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a request and returns the raw response body
    async fn execute(&self, request: Request) -> Result<Vec<u8>, TransportError>;
}
