//! Static description of the Random node, as advertised to the host.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Name of the lower-bound parameter.
pub const MIN_PARAMETER: &str = "min";

/// Name of the upper-bound parameter.
pub const MAX_PARAMETER: &str = "max";

/// Default lower bound when the host supplies none.
pub const DEFAULT_MIN: i64 = 1;

/// Default upper bound when the host supplies none.
pub const DEFAULT_MAX: i64 = 100;

/// Operations offered by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Generate a true random number.
    #[default]
    Generate,
}

impl Operation {
    /// Wire name of the operation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation name is not offered by the node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Self::Generate),
            other => Err(UnknownOperation(other.to_owned())),
        }
    }
}

/// Default values applied to a freshly added node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDefaults {
    /// Default node name.
    pub name: &'static str,
}

/// One selectable operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationOption {
    /// Display name.
    pub name: &'static str,
    /// Wire value.
    pub value: &'static str,
    /// Action label.
    pub action: &'static str,
}

/// A numeric input parameter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberParameter {
    /// Label shown to the user.
    pub display_name: &'static str,
    /// Parameter name used for lookups.
    pub name: &'static str,
    /// Value used when none is supplied.
    pub default: i64,
    /// Whether a value is mandatory.
    pub required: bool,
    /// Help text.
    pub description: &'static str,
}

/// Full node description.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Label shown to the user.
    pub display_name: &'static str,
    /// Internal node name.
    pub name: &'static str,
    /// Node groups.
    pub group: Vec<&'static str>,
    /// Node version.
    pub version: u32,
    /// Help text.
    pub description: &'static str,
    /// Defaults for new nodes.
    pub defaults: NodeDefaults,
    /// Input connection kinds.
    pub inputs: Vec<&'static str>,
    /// Output connection kinds.
    pub outputs: Vec<&'static str>,
    /// Offered operations.
    pub operations: Vec<OperationOption>,
    /// Numeric parameters.
    pub parameters: Vec<NumberParameter>,
}

/// Returns the description of the Random node.
#[must_use]
pub fn describe() -> NodeDescription {
    NodeDescription {
        display_name: "Random",
        name: "random",
        group: vec!["transform"],
        version: 1,
        description: "Generates a true random number using random.org API",
        defaults: NodeDefaults { name: "Random" },
        inputs: vec!["main"],
        outputs: vec!["main"],
        operations: vec![OperationOption {
            name: "True Random Number Generator",
            value: Operation::Generate.as_str(),
            action: "Generate a true random number",
        }],
        parameters: vec![
            NumberParameter {
                display_name: "Minimum Value",
                name: MIN_PARAMETER,
                default: DEFAULT_MIN,
                required: true,
                description: "The minimum possible value (inclusive)",
            },
            NumberParameter {
                display_name: "Maximum Value",
                name: MAX_PARAMETER,
                default: DEFAULT_MAX,
                required: true,
                description: "The maximum possible value (inclusive)",
            },
        ],
    }
}
