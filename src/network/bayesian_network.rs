use log::{debug, info, trace};
use std::fmt;

use super::errors::{QueryError, ValidationError};
use super::model::{CptEntry, NetworkSpec, State};
use super::query::Query;
use super::validate::validate_spec;

/// A validated, immutable Bayesian network over binary variables.
///
/// All checks run once in [`NetworkModel::new`]; a model that exists is valid.
/// Queries never mutate it, so a shared reference can be used from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    spec: NetworkSpec,
    compact: String,
}

impl NetworkModel {
    /// Validates `spec` and builds its compact factorization.
    pub fn new(spec: NetworkSpec) -> Result<Self, ValidationError> {
        validate_spec(&spec)?;
        let compact = compact_factorization(&spec);
        info!(
            "Built network with {} variables: {}",
            spec.len(),
            compact
        );
        Ok(NetworkModel { spec, compact })
    }

    /// Parses a JSON specification and validates it.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let spec = super::loader::load_spec_str(json)?;
        Ok(Self::new(spec)?)
    }

    /// The factorization string, e.g. `P(A)P(B|A)`.
    pub fn compact_representation(&self) -> &str {
        &self.compact
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn entry(&self, variable: &str) -> Option<&CptEntry> {
        self.spec.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.spec.contains_key(variable)
    }

    /// Variable names in specification order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.spec.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.spec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }

    /// Probability of the query target given its evidence, by enumeration.
    ///
    /// Every parent of the target that the evidence does not fix is summed
    /// over both states. Each assignment contributes the product, over the
    /// target's distinct parents, of the first CPT row matching the parent's
    /// effective state; a parent with no matching row zeroes that assignment.
    /// The total is divided by the sum of the target's own CPT values.
    /// Evidence about variables that are not parents of the target is ignored.
    pub fn infer(&self, query: &Query) -> Result<f64, QueryError> {
        let entry = self
            .spec
            .get(query.target())
            .ok_or_else(|| QueryError::UnknownVariable(query.target().to_string()))?;

        let parents = entry.distinct_parents();
        let observed = query.observed();
        let unobserved: Vec<&str> = parents
            .iter()
            .copied()
            .filter(|parent| !observed.contains_key(parent))
            .collect();
        let rows = entry.row_lookup();
        debug!(
            "{}: {} parents, enumerating {:?}",
            query,
            parents.len(),
            unobserved
        );

        let mut assignment = vec![State::Zero; unobserved.len()];
        let mut total = 0.0;
        loop {
            let mut weight = 1.0;
            for parent in &parents {
                let state = observed.get(parent).copied().or_else(|| {
                    unobserved
                        .iter()
                        .position(|name| name == parent)
                        .map(|slot| assignment[slot])
                });
                weight *= state
                    .and_then(|state| rows.get(&(*parent, state)))
                    .map_or(0.0, |&row| entry.probs.get(row).copied().unwrap_or(0.0));
            }
            trace!("{}: assignment {:?} weight {}", query, assignment, weight);
            total += weight;
            if !next_assignment(&mut assignment) {
                break;
            }
        }

        Ok(total / entry.prob_sum())
    }

    /// Runs each query independently.
    pub fn infer_all(&self, queries: &[Query]) -> Vec<Result<f64, QueryError>> {
        queries.iter().map(|query| self.infer(query)).collect()
    }
}

impl fmt::Display for NetworkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact)
    }
}

/// Concatenates `P(var)` or `P(var|parents...)` for every variable in order.
fn compact_factorization(spec: &NetworkSpec) -> String {
    spec.iter()
        .map(|(variable, entry)| {
            if entry.is_root() {
                format!("P({})", variable)
            } else {
                format!("P({}|{})", variable, entry.parent_names().collect::<String>())
            }
        })
        .collect()
}

/// Advances a binary counter over `assignment`; false once it wraps around.
fn next_assignment(assignment: &mut [State]) -> bool {
    for state in assignment.iter_mut() {
        match state {
            State::Zero => {
                *state = State::One;
                return true;
            }
            State::One => *state = State::Zero,
        }
    }
    false
}
