//! # Client configuration: `hikebook.toml`
//!
//! The browser has no runtime environment, so configuration is baked in at
//! build time:
//!
//! 1. defaults ([`HikeBookConfig::default`]);
//! 2. the TOML document in the `HIKEBOOK_CONFIG` build-time variable, if set;
//! 3. the `HIKEBOOK_API_URL` build-time variable, which wins for the base URL.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [bookings]
//! notice_clear_secs = 3       # how long the "cancelled" notice stays up
//!
//! [trails]
//! filter_debounce_ms = 300    # quiet period before a filter change is fetched
//! ```
//!
//! All sections derive `Default`, so a missing or partial document is
//! equivalent to the defaults for whatever it leaves out.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    BaseUrl(String),
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HikeBookConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub bookings: BookingsConfig,
    #[serde(default)]
    pub trails: TrailsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingsConfig {
    #[serde(default = "default_notice_clear_secs")]
    pub notice_clear_secs: u64,
}

fn default_notice_clear_secs() -> u64 {
    3
}

impl Default for BookingsConfig {
    fn default() -> Self {
        Self {
            notice_clear_secs: default_notice_clear_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailsConfig {
    /// 0 disables the debounce.
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,
}

fn default_filter_debounce_ms() -> u64 {
    300
}

impl Default for TrailsConfig {
    fn default() -> Self {
        Self {
            filter_debounce_ms: default_filter_debounce_ms(),
        }
    }
}

impl HikeBookConfig {
    /// Build the configuration from the build-time sources.
    ///
    /// An invalid embedded document is logged and ignored so the app still
    /// starts against the defaults.
    pub fn load() -> Self {
        Self::resolve(option_env!("HIKEBOOK_CONFIG"), option_env!("HIKEBOOK_API_URL"))
    }

    fn resolve(document: Option<&str>, api_url: Option<&str>) -> Self {
        let mut config = match document.map(Self::from_toml) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::error!("Ignoring embedded configuration: {}", e);
                Self::default()
            }
            None => Self::default(),
        };
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            config.api.base_url = url.trim().to_string();
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        config
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::BaseUrl(self.api.base_url.clone()))
        }
    }

    pub fn notice_clear_delay(&self) -> Duration {
        Duration::from_secs(self.bookings.notice_clear_secs)
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.trails.filter_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HikeBookConfig::resolve(None, None);
        assert_eq!(config, HikeBookConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.notice_clear_delay(), Duration::from_secs(3));
        assert_eq!(config.filter_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = HikeBookConfig::from_toml("[bookings]\nnotice_clear_secs = 5\n").unwrap();
        assert_eq!(config.bookings.notice_clear_secs, 5);
        assert_eq!(config.trails.filter_debounce_ms, 300);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_api_url_override_wins_and_is_normalised() {
        let config = HikeBookConfig::resolve(
            Some("[api]\nbase_url = \"https://staging.example.com\"\n"),
            Some("https://api.example.com/"),
        );
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_document_falls_back_to_defaults() {
        assert!(matches!(
            HikeBookConfig::from_toml("[api]\nbase_url = \"ftp://x\"\n"),
            Err(ConfigError::BaseUrl(_))
        ));
        assert!(HikeBookConfig::from_toml("[api").is_err());

        let config = HikeBookConfig::resolve(Some("not = [valid"), None);
        assert_eq!(config, HikeBookConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = HikeBookConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(HikeBookConfig::from_toml(&text).unwrap(), config);
    }
}
