//! Configuration management for the sitedex crawler
//!
//! This module handles loading and validating configuration from
//! environment variables.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: format!("sitedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let request_timeout_secs = std::env::var("SITEDEX_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let user_agent = std::env::var("SITEDEX_USER_AGENT")
            .unwrap_or_else(|_| format!("sitedex/{}", env!("CARGO_PKG_VERSION")));

        let level = std::env::var("SITEDEX_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let format = std::env::var("SITEDEX_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        let config = Self {
            crawler: CrawlerConfig {
                request_timeout_secs,
                user_agent,
            },
            logging: LoggingConfig { level, format },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.request_timeout_secs == 0 {
            bail!("request timeout must be greater than zero");
        }

        if self.crawler.user_agent.is_empty() {
            bail!("user agent must not be empty");
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => bail!("unknown log level: {other}"),
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => bail!("unknown log format: {other}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.crawler.request_timeout_secs, 30);
        assert!(config.crawler.user_agent.starts_with("sitedex/"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.crawler.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = String::from("loud");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = Config::default();
        config.logging.format = String::from("xml");
        assert!(config.validate().is_err());
    }
}
