//! Batch-level failure policy.

/// How per-item failures affect the rest of a batch.
///
/// The policy is chosen by the host once per invocation and never varies
/// between items of the same batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first failing item aborts the batch.
    #[default]
    Abort,
    /// Failures are recorded as error results and processing continues.
    ContinueOnFail,
}

impl FailurePolicy {
    /// Maps the host's "continue on fail" flag onto a policy.
    #[must_use]
    pub fn from_continue_on_fail(continue_on_fail: bool) -> Self {
        if continue_on_fail {
            Self::ContinueOnFail
        } else {
            Self::Abort
        }
    }

    /// Returns `true` when failures should be recorded instead of raised.
    #[must_use]
    pub fn continues_on_fail(self) -> bool {
        matches!(self, Self::ContinueOnFail)
    }
}
