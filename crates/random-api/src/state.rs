//! Shared application state.

use std::sync::Arc;

use random_core::transport::Transport;
use random_range::domain::endpoint::IntegerEndpoint;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound transport to the integer service.
    pub transport: Arc<dyn Transport>,
    /// Where integer requests are sent.
    pub endpoint: IntegerEndpoint,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, endpoint: IntegerEndpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }
}
