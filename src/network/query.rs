use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::QueryError;
use super::model::State;

/// A point query: a target variable plus observed `(variable, state)` pairs.
///
/// The text form accepted by [`FromStr`] is `Target` or
/// `Target|Var=0,Other=1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    target: String,
    evidence: Vec<(String, State)>,
}

impl Query {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            evidence: Vec::new(),
        }
    }

    /// Adds an observation. Later observations of a variable override earlier ones.
    pub fn given(mut self, variable: impl Into<String>, state: State) -> Self {
        self.evidence.push((variable.into(), state));
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn evidence(&self) -> &[(String, State)] {
        &self.evidence
    }

    pub(crate) fn observed(&self) -> HashMap<&str, State> {
        self.evidence
            .iter()
            .map(|(variable, state)| (variable.as_str(), *state))
            .collect()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.evidence.is_empty() {
            return write!(f, "P({})", self.target);
        }
        let evidence: Vec<String> = self
            .evidence
            .iter()
            .map(|(variable, state)| format!("{}={}", variable, state))
            .collect();
        write!(f, "P({}|{})", self.target, evidence.join(","))
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| QueryError::MalformedQuery {
            query: s.to_string(),
            reason: reason.to_string(),
        };

        let (target, evidence) = match s.split_once('|') {
            Some((target, evidence)) => (target.trim(), Some(evidence)),
            None => (s.trim(), None),
        };
        if target.is_empty() {
            return Err(malformed("missing target variable"));
        }

        let mut query = Query::new(target);
        let Some(evidence) = evidence else {
            return Ok(query);
        };
        for pair in evidence.split(',') {
            let (variable, value) = pair
                .split_once('=')
                .ok_or_else(|| malformed("evidence must be written as Var=0 or Var=1"))?;
            let (variable, value) = (variable.trim(), value.trim());
            if variable.is_empty() {
                return Err(malformed("evidence is missing a variable name"));
            }
            let state = value.parse().map_err(|_| QueryError::InvalidState {
                variable: variable.to_string(),
                value: value.to_string(),
            })?;
            query = query.given(variable, state);
        }
        Ok(query)
    }
}
