//! Application configuration
//!
//! Configuration loaded from `.reducer-lab.toml`, with environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable overriding [`AppConfig::catalog_url`]
pub const CATALOG_URL_ENV: &str = "REDUCER_LAB_CATALOG_URL";
/// Environment variable overriding [`AppConfig::users_url`]
pub const USERS_URL_ENV: &str = "REDUCER_LAB_USERS_URL";

/// Ticker periods below this are raised to it
const MIN_INTERVAL_MS: u64 = 1;

/// Application configuration loaded from .reducer-lab.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Movie catalog endpoint (JSON envelope with `data.movies`)
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// User list endpoint (flat JSON array of `{id, name}`)
    #[serde(default = "default_users_url")]
    pub users_url: String,

    /// Timeout for a single fetch
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Period of the stopwatch frame ticker
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Period of the session clock
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Suffix appended to formatted prices
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

fn default_catalog_url() -> String {
    "https://yts.mx/api/v2/list_movies.json".to_string()
}

fn default_users_url() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_frame_interval_ms() -> u64 {
    16 // ~60 Hz
}

fn default_clock_interval_ms() -> u64 {
    1000
}

fn default_currency_suffix() -> String {
    "원".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            users_url: default_users_url(),
            request_timeout_secs: default_request_timeout_secs(),
            frame_interval_ms: default_frame_interval_ms(),
            clock_interval_ms: default_clock_interval_ms(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD first, then home), apply environment
    /// overrides, or fall back to defaults
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_else(|| {
            log::debug!("Using default app config");
            Self::default()
        });
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Stopwatch frame period, never zero
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Session clock period, never zero
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(CATALOG_URL_ENV).filter(|v| !v.is_empty()) {
            log::debug!("Catalog URL overridden by {}", CATALOG_URL_ENV);
            self.catalog_url = url;
        }
        if let Some(url) = lookup(USERS_URL_ENV).filter(|v| !v.is_empty()) {
            log::debug!("Users URL overridden by {}", USERS_URL_ENV);
            self.users_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.catalog_url.ends_with("list_movies.json"));
        assert!(config.users_url.ends_with("/users"));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.clock_interval_ms, 1000);
        assert_eq!(config.currency_suffix, "원");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            frame_interval_ms = 33
            currency_suffix = " KRW"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.frame_interval_ms, 33);
        assert_eq!(config.currency_suffix, " KRW");
        // Other fields should use defaults
        assert_eq!(config.clock_interval_ms, 1000);
        assert_eq!(config.catalog_url, default_catalog_url());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            CATALOG_URL_ENV => Some("http://localhost:8080/movies".to_string()),
            USERS_URL_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.catalog_url, "http://localhost:8080/movies");
        // Empty override is ignored
        assert_eq!(config.users_url, default_users_url());
    }

    #[test]
    fn test_zero_intervals_are_raised() {
        let toml = r#"
            frame_interval_ms = 0
            clock_interval_ms = 0
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
        assert_eq!(config.clock_interval(), Duration::from_millis(1));

        let config = AppConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.clock_interval(), Duration::from_secs(1));
    }
}
