//! Configuration module for the admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default page size for entity lists.
pub const ITEMS_PER_PAGE: u32 = 20;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dealership backend
    pub api_base_url: String,
    /// Page size for entity lists
    pub items_per_page: u32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("CONCESIONARIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let items_per_page = env::var("CONCESIONARIO_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(ITEMS_PER_PAGE);

        let log_level = env::var("CONCESIONARIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            items_per_page,
            log_level,
        }
    }

    /// Initialize the global tracing subscriber for a host application.
    pub fn init_tracing(&self) {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("CONCESIONARIO_API_URL");
        env::remove_var("CONCESIONARIO_PAGE_SIZE");
        env::remove_var("CONCESIONARIO_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.items_per_page, ITEMS_PER_PAGE);
        assert_eq!(config.log_level, "info");
    }
}
