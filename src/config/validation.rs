use crate::config::types::{Config, HttpConfig, ReaperConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_reaper_config(&config.reaper)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates reaper configuration
fn validate_reaper_config(config: &ReaperConfig) -> ConfigResult<()> {
    validate_hostname(&config.hostname)?;

    if config
        .path_suffix
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    {
        return Err(ConfigError::Validation(format!(
            "path_suffix must not contain '/', '?', '#' or whitespace, got '{}'",
            config.path_suffix
        )));
    }

    // minimum_interval of 0 means unlimited, so any u64 is acceptable

    Ok(())
}

/// Validates a hostname, optionally with a port (e.g. "reddit.com", "127.0.0.1:8080")
fn validate_hostname(hostname: &str) -> ConfigResult<()> {
    if hostname.is_empty() {
        return Err(ConfigError::InvalidHostname(
            "hostname cannot be empty".to_string(),
        ));
    }

    if hostname.contains("://") {
        return Err(ConfigError::InvalidHostname(format!(
            "hostname '{}' must not include a scheme; use the tls flag instead",
            hostname
        )));
    }

    if hostname
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace())
    {
        return Err(ConfigError::InvalidHostname(format!(
            "hostname '{}' contains invalid characters",
            hostname
        )));
    }

    // The scheme is irrelevant here; it only lets the URL parser check the authority
    let url = Url::parse(&format!("http://{}", hostname))
        .map_err(|e| ConfigError::InvalidHostname(format!("'{}': {}", hostname, e)))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidHostname(format!(
            "hostname '{}' has no host",
            hostname
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Validate bot name: non-empty, alphanumeric + hyphens/underscores only
    if config.bot_name.is_empty() {
        return Err(ConfigError::Validation(
            "bot_name cannot be empty".to_string(),
        ));
    }

    if !config
        .bot_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "bot_name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.bot_name
        )));
    }

    if config.bot_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "bot_version cannot be empty".to_string(),
        ));
    }

    if config.contact.trim().is_empty() {
        return Err(ConfigError::Validation(
            "contact cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1s, got {}s",
            config.timeout
        )));
    }

    if config.connect_timeout < 1 || config.connect_timeout > config.timeout {
        return Err(ConfigError::Validation(format!(
            "connect_timeout must be between 1s and timeout ({}s), got {}s",
            config.timeout, config.connect_timeout
        )));
    }

    Ok(())
}
