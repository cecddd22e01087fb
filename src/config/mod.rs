//! Configuration module for Reddit-Reaper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use reddit_reaper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("reaper.toml")).unwrap();
//! println!("Reaping from: {}", config.reaper.hostname);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, ReaperConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
