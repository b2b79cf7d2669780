//! Remote client configuration.
//!
//! Defaults to the embedded constants so the application starts with zero
//! configuration; environment variables override for people bringing their
//! own API key.

use marquee_shared::constants::{TMDB_API_KEY, TMDB_BASE_URL};

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog API, always with a trailing slash.
    /// Env: `TMDB_BASE_URL`
    pub base_url: String,

    /// API key sent with every request.
    /// Env: `TMDB_API_KEY`
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: TMDB_BASE_URL.to_string(),
            api_key: TMDB_API_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to the
    /// embedded defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TMDB_BASE_URL") {
            if !url.is_empty() {
                config.base_url = if url.ends_with('/') { url } else { format!("{url}/") };
            }
        }

        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.themoviedb.org/3/");
        assert!(!config.api_key.is_empty());
    }

    // The only test touching these env vars; they are process-global.
    #[test]
    fn env_overrides_win_over_defaults() {
        std::env::set_var("TMDB_BASE_URL", "https://example.test/v3");
        std::env::set_var("TMDB_API_KEY", "override-key");

        let config = ApiConfig::from_env();
        // The missing trailing slash is appended.
        assert_eq!(config.base_url, "https://example.test/v3/");
        assert_eq!(config.api_key, "override-key");

        std::env::remove_var("TMDB_BASE_URL");
        std::env::remove_var("TMDB_API_KEY");

        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, TMDB_BASE_URL);
        assert_eq!(config.api_key, TMDB_API_KEY);
    }
}
