use std::env;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const API_KEY_VAR: &str = "YANDEX_LOCATOR_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://search-maps.yandex.ru/v1/";
pub const DEFAULT_LANG: &str = "ru_RU";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub lang: String,
    pub timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(AppError::MissingApiKey(API_KEY_VAR))?;

        let base_url = lookup("LOCATOR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let lang = lookup("LOCATOR_LANG").unwrap_or_else(|| DEFAULT_LANG.to_string());
        let timeout_secs = match lookup("LOCATOR_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => return Err(AppError::ConfigError("Timeout must be at least 1 second".to_string())),
                Ok(secs) => secs,
                Err(e) => return Err(AppError::ConfigError(format!("Invalid timeout: {}", e))),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_key,
            base_url,
            lang,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Key prefix safe to print on the console.
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(10).collect();
        format!("{}...", prefix)
    }
}
