//! Test transports — deterministic `Transport` implementations for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::Rng;
use random_core::error::TransportError;
use random_core::transport::Transport;

/// A transport that answers every request with the same body and records
/// the URLs it was asked for.
#[derive(Debug)]
pub struct StubTransport {
    body: String,
    requested: Mutex<Vec<String>>,
}

impl StubTransport {
    /// Create a stub that returns `body` on every call.
    #[must_use]
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_owned(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Number of `fetch_text` calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// Returns a snapshot of the requested URLs, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        self.requested.lock().unwrap().push(url.to_owned());
        Ok(self.body.clone())
    }
}

/// A transport that always fails as if the network were unreachable.
#[derive(Debug, Default)]
pub struct FailingTransport {
    calls: AtomicUsize,
}

impl FailingTransport {
    /// Number of `fetch_text` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn fetch_text(&self, _url: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::Request("connection refused".into()))
    }
}

/// A transport that reads `min` and `max` from the request query and
/// answers with a locally drawn value in that range. Stands in for the
/// remote service in range property tests.
#[derive(Debug, Default)]
pub struct RangeTransport {
    calls: AtomicUsize,
}

impl RangeTransport {
    /// Number of `fetch_text` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn query_bound(url: &url::Url, name: &str) -> Result<i64, TransportError> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .and_then(|(_, value)| value.parse().ok())
        .ok_or_else(|| TransportError::Status {
            status: 400,
            body: format!("missing or invalid '{name}'"),
        })
}

#[async_trait]
impl Transport for RangeTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let parsed = url::Url::parse(url).map_err(|e| TransportError::Request(e.to_string()))?;
        let min = query_bound(&parsed, "min")?;
        let max = query_bound(&parsed, "max")?;
        let value = rand::rng().random_range(min..=max);
        Ok(format!("{value}\n"))
    }
}
