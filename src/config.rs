//! App Configuration
//!
//! Defaults with build-time overrides from the environment.

use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Feedback API base, without trailing slash
    pub api_base_url: String,
    /// localStorage key holding the auth token
    pub token_key: String,
    /// Dashboard auto-refresh period
    pub refresh_interval: Duration,
    /// How often a stored token is checked for expiry
    pub session_check_interval: Duration,
    pub toast_duration: Duration,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_key: "authToken".to_string(),
            refresh_interval: Duration::from_secs(30),
            session_check_interval: Duration::from_secs(5 * 60),
            toast_duration: Duration::from_secs(5),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `FEEDBACK_API_URL` / `FEEDBACK_LOG_LEVEL` at build time
    pub fn load() -> Self {
        Self::with_overrides(option_env!("FEEDBACK_API_URL"), option_env!("FEEDBACK_LOG_LEVEL"))
    }

    fn with_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|s| !s.is_empty()) {
            if reqwest::Url::parse(url).is_ok() {
                config.api_base_url = url.trim_end_matches('/').to_string();
            } else {
                log::warn!("[CONFIG] Ignoring invalid API URL {:?}", url);
            }
        }
        if let Some(level) = log_level.and_then(|s| s.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.toast_duration, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(Some("https://api.school.example/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.school.example");
        assert_eq!(config.log_level, log::LevelFilter::Debug);

        let config = AppConfig::with_overrides(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::with_overrides(Some("localhost without scheme"), None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }
}
