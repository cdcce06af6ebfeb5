//! Test item source — fixed `(min, max)` pairs per item.

use random_core::error::RandomError;
use random_core::policy::FailurePolicy;
use random_core::source::ItemSource;

/// An item source backed by a fixed list of `(min, max)` pairs.
#[derive(Debug, Clone)]
pub struct StaticItemSource {
    bounds: Vec<(i64, i64)>,
    policy: FailurePolicy,
}

impl StaticItemSource {
    /// Create a source with one item per `(min, max)` pair.
    #[must_use]
    pub fn new(bounds: Vec<(i64, i64)>, policy: FailurePolicy) -> Self {
        Self { bounds, policy }
    }

    /// Shorthand for a single-item batch that aborts on failure.
    #[must_use]
    pub fn single(min: i64, max: i64) -> Self {
        Self::new(vec![(min, max)], FailurePolicy::Abort)
    }
}

impl ItemSource for StaticItemSource {
    fn item_count(&self) -> usize {
        self.bounds.len()
    }

    fn integer_parameter(&self, name: &str, item_index: usize) -> Result<i64, RandomError> {
        let parameter_error = |reason: String| RandomError::Parameter {
            name: name.to_owned(),
            reason,
        };
        let (min, max) = self
            .bounds
            .get(item_index)
            .ok_or_else(|| parameter_error(format!("no item at index {item_index}")))?;
        match name {
            "min" => Ok(*min),
            "max" => Ok(*max),
            _ => Err(parameter_error("unknown parameter".to_owned())),
        }
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }
}
