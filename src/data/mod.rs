//! Data module for harvested records
//!
//! This module holds the typed records a reap produces and the parsing seam
//! that turns raw response bytes into them.
//!
//! # Components
//!
//! - `Comment`, `Post`, `Message`: the record kinds a response may carry
//! - `Harvest`: the three record sequences returned from a single reap
//! - `Parser`: the capability that decodes a response body into records

mod parser;
mod records;

// Re-export main types
pub use parser::{Parsed, Parser};
pub use records::{Comment, Harvest, Message, Post};
