//! Item source backed by a posted JSON batch.
//!
//! Parameters are either literal integers shared by every item or field
//! references evaluated against each item, so `min` and `max` may differ
//! from one item to the next.

use random_core::error::RandomError;
use random_core::policy::FailurePolicy;
use random_core::source::ItemSource;
use random_range::domain::description::{DEFAULT_MAX, DEFAULT_MIN, MAX_PARAMETER, MIN_PARAMETER};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a node parameter is resolved for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// The same integer for every item.
    Literal(i64),
    /// The integer stored under `field` in each item.
    Field {
        /// Top-level key in the item's JSON object.
        field: String,
    },
}

/// Parameter definitions posted with a batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterSet {
    /// Lower bound; node default when omitted.
    #[serde(default = "default_min")]
    pub min: ParameterValue,
    /// Upper bound; node default when omitted.
    #[serde(default = "default_max")]
    pub max: ParameterValue,
}

fn default_min() -> ParameterValue {
    ParameterValue::Literal(DEFAULT_MIN)
}

fn default_max() -> ParameterValue {
    ParameterValue::Literal(DEFAULT_MAX)
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

/// An `ItemSource` over a list of JSON items.
#[derive(Debug, Clone)]
pub struct JsonItemSource {
    items: Vec<Value>,
    parameters: ParameterSet,
    policy: FailurePolicy,
}

impl JsonItemSource {
    /// Create a source for `items`, resolving `parameters` per item.
    #[must_use]
    pub fn new(items: Vec<Value>, parameters: ParameterSet, policy: FailurePolicy) -> Self {
        Self {
            items,
            parameters,
            policy,
        }
    }
}

impl ItemSource for JsonItemSource {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn integer_parameter(&self, name: &str, item_index: usize) -> Result<i64, RandomError> {
        let parameter_error = |reason: String| RandomError::Parameter {
            name: name.to_owned(),
            reason,
        };

        let value = match name {
            MIN_PARAMETER => &self.parameters.min,
            MAX_PARAMETER => &self.parameters.max,
            _ => return Err(parameter_error("unknown parameter".to_owned())),
        };

        match value {
            ParameterValue::Literal(n) => Ok(*n),
            ParameterValue::Field { field } => {
                let item = self
                    .items
                    .get(item_index)
                    .ok_or_else(|| parameter_error(format!("no item at index {item_index}")))?;
                match item.get(field) {
                    Some(found) => found.as_i64().ok_or_else(|| {
                        parameter_error(format!("field '{field}' is not an integer: {found}"))
                    }),
                    None => Err(parameter_error(format!("field '{field}' is missing"))),
                }
            }
        }
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }
}
