//! Remote integer service endpoint.

use super::bounds::Bounds;

/// Base URL of the public random.org service.
pub const DEFAULT_BASE_URL: &str = "https://www.random.org";

/// Builds request URLs for the remote integer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerEndpoint {
    base_url: String,
}

impl IntegerEndpoint {
    /// Creates an endpoint rooted at `base_url`. A trailing slash is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL requesting a single base-10 integer in `bounds` as plain text.
    #[must_use]
    pub fn integers_url(&self, bounds: &Bounds) -> String {
        format!(
            "{}/integers/?num=1&min={}&max={}&col=1&base=10&format=plain&rnd=new",
            self.base_url,
            bounds.min(),
            bounds.max()
        )
    }
}

impl Default for IntegerEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
