//! Inclusive integer bounds for one item.

use random_core::error::RandomError;

/// A validated `[min, max]` pair with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Validates and builds a bounds pair.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidRange` if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// A degenerate range has exactly one possible value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
