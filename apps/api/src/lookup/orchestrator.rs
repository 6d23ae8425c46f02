//! Lookup orchestrator. Drives one profile lookup at a time through
//! `Idle → Loading → Success | Failure`.
//!
//! Submissions may overlap. Each one is tagged with a sequence number when it
//! is issued, and its outcome is applied only while that number is still the
//! current one, so the visible state always belongs to the last submission
//! regardless of which response arrives first.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::profile::{normalize, ProfileView, RawProfile};
use crate::profile_client::{FetchError, ProfileSource};

/// Shown when a failure carries no usable description.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while retrieving the profile";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Success(ProfileView),
    Failure(String),
}

/// Everything the page needs to render the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupSnapshot {
    pub phase: Phase,
    pub input_url: String,
}

struct LookupState {
    phase: Phase,
    input_url: String,
    /// Sequence number of the most recently issued submission.
    current: u64,
}

pub struct LookupOrchestrator {
    source: Arc<dyn ProfileSource>,
    timeout: Option<Duration>,
    // Never held across the fetch.
    state: Mutex<LookupState>,
}

impl LookupOrchestrator {
    pub fn new(source: Arc<dyn ProfileSource>, timeout: Option<Duration>) -> Self {
        Self {
            source,
            timeout,
            state: Mutex::new(LookupState {
                phase: Phase::Idle,
                input_url: String::new(),
                current: 0,
            }),
        }
    }

    pub async fn snapshot(&self) -> LookupSnapshot {
        let state = self.state.lock().await;
        LookupSnapshot {
            phase: state.phase.clone(),
            input_url: state.input_url.clone(),
        }
    }

    /// Edits the input URL. Refused while a lookup is loading.
    pub async fn set_input(&self, url: &str) -> bool {
        let mut state = self.state.lock().await;
        if state.phase == Phase::Loading {
            return false;
        }
        state.input_url = url.to_string();
        true
    }

    /// Runs one lookup for `url`.
    ///
    /// Returns the phase this submission produced, or `None` if a later
    /// submission was issued while it was in flight and its outcome was dropped.
    pub async fn submit(&self, url: &str) -> Option<Phase> {
        let seq = {
            let mut state = self.state.lock().await;
            state.current += 1;
            state.input_url = url.to_string();
            state.phase = Phase::Loading;
            state.current
        };
        info!(seq, "Profile lookup submitted");

        let phase = match lookup_profile(self.source.as_ref(), url, self.timeout).await {
            Ok(view) => Phase::Success(view),
            Err(e) => {
                warn!(seq, "Profile lookup failed: {e}");
                Phase::Failure(failure_message(&e))
            }
        };

        let mut state = self.state.lock().await;
        if state.current != seq {
            debug!(seq, current = state.current, "Discarding superseded lookup result");
            return None;
        }
        state.phase = phase.clone();
        Some(phase)
    }
}

/// Validates `url`, fetches the payload once and normalizes it.
/// Shared by the orchestrator and the stateless JSON endpoint.
pub async fn lookup_profile(
    source: &dyn ProfileSource,
    url: &str,
    timeout: Option<Duration>,
) -> Result<ProfileView, FetchError> {
    let url = validate_profile_url(url)?;

    let payload = match timeout {
        Some(limit) => tokio::time::timeout(limit, source.fetch_profile(url))
            .await
            .map_err(|_| FetchError::Timeout {
                secs: limit.as_secs(),
            })??,
        None => source.fetch_profile(url).await?,
    };

    Ok(normalize(&RawProfile::from_json(payload)))
}

/// Accepts only non-empty absolute http(s) URLs. Returns the trimmed input.
pub fn validate_profile_url(url: &str) -> Result<&str, FetchError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("a profile URL is required".to_string()));
    }
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url} ({e})")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "{url} (unsupported scheme '{}')",
            parsed.scheme()
        )));
    }
    Ok(url)
}

/// User-facing text for a failed lookup. Falls back to
/// `FALLBACK_ERROR_MESSAGE` when the error carries no description of its own.
fn failure_message(err: &FetchError) -> String {
    let detail = match err {
        FetchError::Api { message, .. } => message.clone(),
        FetchError::InvalidUrl(reason) => reason.clone(),
        FetchError::Http(e) => e.to_string(),
        FetchError::Parse(e) => e.to_string(),
        FetchError::Timeout { .. } => return err.to_string(),
    };
    if detail.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}
