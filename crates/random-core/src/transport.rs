//! Outbound transport abstraction.
//!
//! In production this wraps an HTTP client. In tests, a stub returning
//! canned bodies is injected.

use async_trait::async_trait;

use crate::error::TransportError;

/// Minimal text-over-HTTP port.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET on `url` and returns the response body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, TransportError>;
}
