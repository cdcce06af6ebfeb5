//! Per-item results.

use random_core::error::RandomError;
use serde::{Deserialize, Serialize};

/// Result for one input item.
///
/// Serializes to `{ "randomNumber": n }` or
/// `{ "error": message, "itemIndex": i }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemOutcome {
    /// A random number was produced.
    Success {
        /// The generated value.
        #[serde(rename = "randomNumber")]
        random_number: i64,
    },
    /// The item failed and the batch continued past it.
    Failure {
        /// Human-readable failure message.
        error: String,
        /// Index of the failing item.
        #[serde(rename = "itemIndex")]
        item_index: usize,
    },
}

impl ItemOutcome {
    /// Builds a success outcome.
    #[must_use]
    pub fn success(random_number: i64) -> Self {
        Self::Success { random_number }
    }

    /// Builds a failure outcome for the item at `item_index`.
    #[must_use]
    pub fn failure(error: &RandomError, item_index: usize) -> Self {
        Self::Failure {
            error: error.to_string(),
            item_index,
        }
    }

    /// The generated value, if any.
    #[must_use]
    pub fn random_number(&self) -> Option<i64> {
        match self {
            Self::Success { random_number } => Some(*random_number),
            Self::Failure { .. } => None,
        }
    }
}
