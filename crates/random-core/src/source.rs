//! Item source abstraction.
//!
//! The host owns the input items and evaluates node parameters against
//! them. The randomizer only ever reads through this trait.

use crate::error::RandomError;
use crate::policy::FailurePolicy;

/// Read-only view of one batch of input items.
pub trait ItemSource: Send + Sync {
    /// Number of items in the batch.
    fn item_count(&self) -> usize;

    /// Resolves an integer parameter for the item at `item_index`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Parameter` if the value is missing or is not an
    /// integer for this item.
    fn integer_parameter(&self, name: &str, item_index: usize) -> Result<i64, RandomError>;

    /// Failure policy for the whole batch.
    fn failure_policy(&self) -> FailurePolicy;
}
