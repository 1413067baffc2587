use anyhow::{Context, Result};
use dotenvy::dotenv;
use email_extraction::SecretString;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Enables the web search stage when present
    pub serper_api_key: Option<SecretString>,
    pub fetch_timeout: Duration,
    pub user_agent: Option<String>,
    /// Empty means any origin may call the API
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            serper_api_key: non_empty("SERPER_API_KEY").map(SecretString::from),
            fetch_timeout: Duration::from_secs(
                non_empty("SCRAPER_TIMEOUT_SECS")
                    .unwrap_or_else(|| "15".to_string())
                    .parse()
                    .context("SCRAPER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            user_agent: non_empty("SCRAPER_USER_AGENT"),
            allowed_origins: non_empty("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn search_enabled(&self) -> bool {
        self.serper_api_key.is_some()
    }
}
