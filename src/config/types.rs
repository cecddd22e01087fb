use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Reddit-Reaper
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub reaper: ReaperConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Reaper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReaperConfig {
    /// Host every request is sent to, optionally with a port
    pub hostname: String,

    /// Use https instead of http
    #[serde(default = "default_tls")]
    pub tls: bool,

    /// Suffix appended to read paths by endpoint helpers (e.g. ".json")
    #[serde(rename = "path-suffix", default)]
    pub path_suffix: String,

    /// Minimum time between requests (milliseconds); zero disables limiting
    #[serde(rename = "minimum-interval", default)]
    pub minimum_interval: u64,
}

impl ReaperConfig {
    /// The minimum interval as a duration
    pub fn minimum_interval(&self) -> Duration {
        Duration::from_millis(self.minimum_interval)
    }
}

fn default_tls() -> bool {
    true
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the bot
    #[serde(rename = "bot-name")]
    pub bot_name: String,

    /// Version of the bot
    #[serde(rename = "bot-version")]
    pub bot_version: String,

    /// URL or account the remote service can use to reach the operator
    pub contact: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}
