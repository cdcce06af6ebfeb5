//! Domain error types.

use thiserror::Error;

/// Message reported when an item's minimum exceeds its maximum.
pub const INVALID_RANGE_MESSAGE: &str = "Minimum value cannot be greater than the maximum value.";

/// Failure raised by a `Transport` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The remote service answered with a non-success status.
    #[error("remote service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}

/// Failure resolving a single item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The item's minimum is greater than its maximum.
    #[error("{}", INVALID_RANGE_MESSAGE)]
    InvalidRange {
        /// Requested minimum.
        min: i64,
        /// Requested maximum.
        max: i64,
    },

    /// The remote service returned a body that is not a usable integer.
    #[error("The API returned an invalid response: {body}")]
    InvalidApiResponse {
        /// Raw response body.
        body: String,
    },

    /// The outbound call itself failed.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The host could not resolve a parameter for the item.
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Parameter name (`min` or `max`).
        name: String,
        /// Why the value could not be resolved.
        reason: String,
    },
}

/// A per-item failure that aborted a batch, tagged with its position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item {item_index} failed: {source}")]
pub struct ItemError {
    /// Index of the failing item in the input sequence.
    pub item_index: usize,
    /// The underlying failure.
    #[source]
    pub source: RandomError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_matches_host_text() {
        let err = RandomError::InvalidRange { min: 5, max: 1 };
        assert_eq!(
            err.to_string(),
            "Minimum value cannot be greater than the maximum value."
        );
    }

    #[test]
    fn test_invalid_api_response_includes_body() {
        let err = RandomError::InvalidApiResponse {
            body: "not-a-number".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "The API returned an invalid response: not-a-number"
        );
    }

    #[test]
    fn test_transport_error_surfaces_transport_message() {
        let err = RandomError::from(TransportError::Status {
            status: 503,
            body: "busy".to_owned(),
        });
        assert_eq!(err.to_string(), "remote service returned status 503: busy");
    }

    #[test]
    fn test_item_error_names_item_index() {
        let err = ItemError {
            item_index: 1,
            source: RandomError::InvalidRange { min: 5, max: 1 },
        };
        assert_eq!(
            err.to_string(),
            "item 1 failed: Minimum value cannot be greater than the maximum value."
        );
    }
}
