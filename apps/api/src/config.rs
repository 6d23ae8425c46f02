use std::time::Duration;

use anyhow::{Context, Result};

use crate::profile_client::DEFAULT_BASE_URL;

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
///
/// The provider credentials are optional here: a missing key only shows up as
/// a failed lookup, never as a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub profile_api_base_url: String,
    /// `None` disables the bound on the outbound call.
    pub fetch_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fetch_timeout_secs = match var("FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Config {
            rapidapi_key: var("RAPIDAPI_KEY").unwrap_or_default(),
            rapidapi_host: var("RAPIDAPI_HOST").unwrap_or_default(),
            profile_api_base_url: var("PROFILE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            fetch_timeout: (fetch_timeout_secs > 0)
                .then(|| Duration::from_secs(fetch_timeout_secs)),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// API key safe for logs.
    pub fn masked_key(&self) -> String {
        let k = &self.rapidapi_key;
        if k.len() <= 8 {
            return "[REDACTED]".to_string();
        }
        match (k.get(..4), k.get(k.len() - 4..)) {
            (Some(head), Some(tail)) => format!("{head}***{tail}"),
            _ => "[REDACTED]".to_string(),
        }
    }
}
