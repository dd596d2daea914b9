//! Error types raised while building and querying a network.

use thiserror::Error;

/// Reasons a specification is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A variable's probabilities do not sum to 1.
    #[error("Invalid probability distribution for variable {variable}: sum is {sum} (expected 1)")]
    DistributionSumMismatch { variable: String, sum: f64 },

    /// A probability is not a float in `[0, 1]`.
    #[error(
        "Invalid probability distribution for variable {variable}: probs[{index}] = {value} must be a float between 0 and 1"
    )]
    ProbabilityOutOfRange {
        variable: String,
        index: usize,
        value: String,
    },

    /// A parent entry is not a `(name, "0" | "1")` pair of strings.
    #[error("Invalid parent list for variable {variable}: parents[{index}] = {found}")]
    MalformedParentReference {
        variable: String,
        index: usize,
        found: String,
    },

    /// A parent entry names a variable the network does not declare.
    #[error("Parent variable {parent} of {variable} not defined")]
    UndefinedParent { variable: String, parent: String },

    /// The back-reference chase returned to an already visited variable.
    #[error("Circular dependency between {variable} and {other}")]
    CircularDependency { variable: String, other: String },

    /// A serialized entry lacks its `parents` or `probs` arrays.
    #[error("Invalid entry for variable {variable}: {reason}")]
    MalformedEntry { variable: String, reason: String },

    /// The serialized specification is not a mapping of variable names.
    #[error("Specification must be an object mapping variable names to CPT entries")]
    MalformedSpecification,
}

impl ValidationError {
    /// The variable the error was raised for, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            ValidationError::DistributionSumMismatch { variable, .. }
            | ValidationError::ProbabilityOutOfRange { variable, .. }
            | ValidationError::MalformedParentReference { variable, .. }
            | ValidationError::UndefinedParent { variable, .. }
            | ValidationError::CircularDependency { variable, .. }
            | ValidationError::MalformedEntry { variable, .. } => Some(variable),
            ValidationError::MalformedSpecification => None,
        }
    }
}

/// Errors raised by a single query. They never invalidate the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query target is not a variable of the network.
    #[error("Invalid query variable: {0}")]
    UnknownVariable(String),

    /// The textual query could not be split into a target and evidence.
    #[error("Malformed query {query:?}: {reason}")]
    MalformedQuery { query: String, reason: String },

    /// An evidence value is not `0` or `1`.
    #[error("Invalid value {value:?} for {variable}: expected \"0\" or \"1\"")]
    InvalidState { variable: String, value: String },
}

/// A string that is neither `"0"` nor `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected \"0\" or \"1\", got {0:?}")]
pub struct ParseStateError(pub String);
