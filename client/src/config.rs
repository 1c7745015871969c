//! Client configuration

use std::env;
use std::time::Duration;

/// Default API address, matching the server's default bind
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3003";

/// Default timeout for a whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and port of the API, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SCRIBE_API_URL` and `SCRIBE_API_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = env::var("SCRIBE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("SCRIBE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self::new(base_url).with_timeout(timeout)
    }

    /// Absolute URL for an API path such as `/api/posts`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ClientConfig::new("http://blog.example/");
        assert_eq!(config.url("/api/posts"), "http://blog.example/api/posts");
    }
}
