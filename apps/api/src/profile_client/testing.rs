//! In-process `ProfileSource` stubs for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use super::{FetchError, ProfileSource};

/// Answers every request with the same payload (or the same API error).
pub struct StaticSource {
    payload: Value,
    status: Option<u16>,
}

impl StaticSource {
    pub fn ok(payload: Value) -> Self {
        Self {
            payload,
            status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            payload: Value::Null,
            status: Some(status),
        }
    }
}

#[async_trait]
impl ProfileSource for StaticSource {
    async fn fetch_profile(&self, _profile_url: &str) -> Result<Value, FetchError> {
        match self.status {
            Some(status) => Err(FetchError::Api {
                status,
                message: "stubbed failure".to_string(),
            }),
            None => Ok(self.payload.clone()),
        }
    }
}

/// Counts calls and answers with an empty profile.
#[derive(Default)]
pub struct CountingSource {
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for CountingSource {
    async fn fetch_profile(&self, _profile_url: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({}))
    }
}

type Outcome = Result<Value, FetchError>;

/// Holds each request until the test releases it, so responses can be
/// delivered in any order.
pub struct GatedSource {
    pending: Mutex<HashMap<String, oneshot::Receiver<Outcome>>>,
}

pub struct Gates {
    senders: Mutex<HashMap<String, oneshot::Sender<Outcome>>>,
}

impl GatedSource {
    pub fn new(urls: &[&str]) -> (Self, Gates) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for url in urls {
            let (tx, rx) = oneshot::channel();
            pending.insert(url.to_string(), rx);
            senders.insert(url.to_string(), tx);
        }
        (
            Self {
                pending: Mutex::new(pending),
            },
            Gates {
                senders: Mutex::new(senders),
            },
        )
    }
}

impl Gates {
    pub fn release(&self, url: &str, outcome: Outcome) {
        let sender = self
            .senders
            .lock()
            .unwrap()
            .remove(url)
            .unwrap_or_else(|| panic!("no gate for {url}"));
        let _ = sender.send(outcome);
    }
}

#[async_trait]
impl ProfileSource for GatedSource {
    async fn fetch_profile(&self, profile_url: &str) -> Result<Value, FetchError> {
        let receiver = self.pending.lock().unwrap().remove(profile_url);
        match receiver {
            Some(receiver) => receiver.await.unwrap_or_else(|_| {
                Err(FetchError::Api {
                    status: 499,
                    message: "gate dropped".to_string(),
                })
            }),
            None => Err(FetchError::Api {
                status: 404,
                message: format!("no gate for {profile_url}"),
            }),
        }
    }
}
