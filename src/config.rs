//! Runtime configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::ErrorCode;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TRANSCRIPT_LINE_DELAY_MS: u64 = 1000;

/// Reserved for a remote material classifier. Never sent anywhere.
pub const CLASSIFIER_API_KEY_VAR: &str = "XAI_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_HOST: {0}")]
    InvalidHost(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHost(_) => "E_CONFIG_HOST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Pause between streamed transcript lines. Zero disables pacing.
    pub transcript_line_delay: Duration,
    /// `true` when `XAI_API_KEY` is set. The key itself is not retained.
    pub classifier_api_key_present: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            transcript_line_delay: Duration::from_millis(DEFAULT_TRANSCRIPT_LINE_DELAY_MS),
            classifier_api_key_present: false,
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `TRANSCRIPT_LINE_DELAY_MS`: default 1000
    /// - `XAI_API_KEY`: presence only
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let delay_ms = parse_or(lookup("TRANSCRIPT_LINE_DELAY_MS"), DEFAULT_TRANSCRIPT_LINE_DELAY_MS);

        Self {
            host: lookup("BIND_HOST")
                .map(|h| h.trim().to_owned())
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or(lookup("PORT"), DEFAULT_PORT),
            transcript_line_delay: Duration::from_millis(delay_ms),
            classifier_api_key_present: lookup(CLASSIFIER_API_KEY_VAR).is_some_and(|k| !k.is_empty()),
        }
    }

    /// Socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
