//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding the remote API base URL.
pub const API_URL_ENV: &str = "ECOSPROUT_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Simulated latency before fallback data is handed out.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(800);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    fallback_delay: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        })
    }

    /// Read the base URL from `ECOSPROUT_API_URL`, defaulting to
    /// `http://localhost:3001/api`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
            tracing::info!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(&url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fallback_delay(&self) -> Duration {
        self.fallback_delay
    }

    /// Full URL for an endpoint given as path segments below the base.
    ///
    /// Segments are percent-encoded, so ids containing `/` or spaces stay a
    /// single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            timeout: DEFAULT_TIMEOUT,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_below_base_path() {
        let config = ClientConfig::new("http://localhost:3001/api").unwrap();
        assert_eq!(
            config.endpoint(&["products", "1"]).as_str(),
            "http://localhost:3001/api/products/1"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let config = ClientConfig::new("http://localhost:3001/api/").unwrap();
        assert_eq!(config.endpoint(&["team"]).as_str(), "http://localhost:3001/api/team");
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        let config = ClientConfig::new("http://h/api").unwrap();
        assert_eq!(config.endpoint(&["products", "a/b c"]).as_str(), "http://h/api/products/a%2Fb%20c");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(ClientConfig::new("mailto:ops@ecosprout.com").is_err());
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().as_str(), "http://localhost:3001/api");
        assert_eq!(config.fallback_delay(), Duration::from_millis(800));
    }
}
