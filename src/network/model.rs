use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::ParseStateError;

/// Value of a binary variable, written `"0"` or `"1"` when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl State {
    pub const ALL: [State; 2] = [State::Zero, State::One];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::Zero => "0",
            State::One => "1",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(State::Zero),
            "1" => Ok(State::One),
            other => Err(ParseStateError(other.to_string())),
        }
    }
}

/// One row of a CPT: a parent variable together with the value it takes in that row.
///
/// Serialized as a two-element array, e.g. `["Rain", "1"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, State)", into = "(String, State)")]
pub struct ParentRef {
    pub variable: String,
    pub state: State,
}

impl ParentRef {
    pub fn new(variable: impl Into<String>, state: State) -> Self {
        Self {
            variable: variable.into(),
            state,
        }
    }
}

impl From<(String, State)> for ParentRef {
    fn from((variable, state): (String, State)) -> Self {
        Self { variable, state }
    }
}

impl From<ParentRef> for (String, State) {
    fn from(parent: ParentRef) -> Self {
        (parent.variable, parent.state)
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.variable, self.state)
    }
}

/// Conditional probability table of a single variable.
///
/// `parents[i]` is the parent row that `probs[i]` belongs to. A variable
/// with no parent rows carries its own marginal in `probs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CptEntry {
    pub parents: Vec<ParentRef>,
    pub probs: Vec<f64>,
}

impl CptEntry {
    pub fn new(parents: Vec<ParentRef>, probs: Vec<f64>) -> Self {
        Self { parents, probs }
    }

    /// Entry for a variable without parents.
    pub fn prior(probs: Vec<f64>) -> Self {
        Self {
            parents: Vec::new(),
            probs,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn prob_sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Parent variable names row by row, duplicates included.
    pub fn parent_names(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(|p| p.variable.as_str())
    }

    /// Parent variable names in order of first appearance.
    pub fn distinct_parents(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.parent_names() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// First row whose parent reference refers to `variable`.
    pub fn back_reference(&self, variable: &str) -> Option<&ParentRef> {
        self.parents.iter().find(|p| p.variable == variable)
    }

    /// Maps each `(parent, state)` to the index of the first row carrying it.
    pub fn row_lookup(&self) -> HashMap<(&str, State), usize> {
        let mut rows = HashMap::with_capacity(self.parents.len());
        for (index, parent) in self.parents.iter().enumerate() {
            rows.entry((parent.variable.as_str(), parent.state))
                .or_insert(index);
        }
        rows
    }
}

/// Insertion-ordered mapping from variable name to its CPT.
pub type NetworkSpec = IndexMap<String, CptEntry>;
