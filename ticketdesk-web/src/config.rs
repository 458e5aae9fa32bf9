//! Web client configuration
//!
//! Settings are fixed at build time; the page has no runtime configuration.

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Build-time configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Base URL of the ticket REST API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_base_url(option_env!("TICKETDESK_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl WebConfig {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_api() {
        let config = WebConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = WebConfig::from_base_url("https://helpdesk.example.com/api/");
        assert_eq!(config.api_base_url(), "https://helpdesk.example.com/api");
    }

    #[test]
    fn test_new_matches_default() {
        assert_eq!(WebConfig::new(), WebConfig::default());
    }
}
