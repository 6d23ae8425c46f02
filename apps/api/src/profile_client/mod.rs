//! Profile API client: the only place that talks to the profile-data provider.
//!
//! The provider is reached through the `ProfileSource` trait so the lookup flow
//! can run against any implementation; `ProfileClient` is the HTTP one.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod testing;

pub const DEFAULT_BASE_URL: &str = "https://linkedin-api8.p.rapidapi.com";
const PROFILE_BY_URL_PATH: &str = "/get-profile-data-by-url";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Invalid profile URL: {0}")]
    InvalidUrl(String),
}

/// Anything that can turn a public profile URL into a raw provider payload.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, profile_url: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// HTTP client for the profile-data provider.
#[derive(Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl ProfileClient {
    pub fn new(client: Client, base_url: String, api_key: String, api_host: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROFILE_BY_URL_PATH)
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    /// One GET per call; no retries.
    async fn fetch_profile(&self, profile_url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("url", profile_url)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Profile API returned {}", status);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: api_error_message(&body, status.canonical_reason()),
            });
        }

        let payload: Value = serde_json::from_str(&body)?;
        debug!("Profile API call succeeded ({} bytes)", body.len());
        Ok(payload)
    }
}

/// Picks the most useful description of a failed call: the provider's
/// `message` field, then the raw body, then the HTTP reason phrase.
fn api_error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(err) = serde_json::from_str::<ProviderError>(body) {
        if !err.message.trim().is_empty() {
            return err.message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reason.unwrap_or("request failed").to_string()
}
