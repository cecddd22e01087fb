//! Response parsing seam
//!
//! The reaper never interprets response bodies itself. A `Parser` implementation
//! agrees on a wire format with whatever serves the host and is injected when the
//! reaper is built.

use crate::data::{Comment, Message, Post};
use crate::ParseError;

/// The three record sequences decoded from one response body
pub type Parsed = (Vec<Comment>, Vec<Post>, Vec<Message>);

/// Trait for response parser implementations
///
/// Implementations must accept arbitrary bytes, including an empty slice,
/// without panicking. Malformed input is reported as an error rather than as a
/// truncated result.
pub trait Parser: Send + Sync {
    /// Decodes a raw response body into comments, posts and messages
    ///
    /// # Arguments
    ///
    /// * `blob` - The raw response body
    ///
    /// # Returns
    ///
    /// * `Ok(Parsed)` - Records in the order they appear in the response
    /// * `Err(ParseError)` - The body could not be interpreted
    fn parse(&self, blob: &[u8]) -> Result<Parsed, ParseError>;
}
