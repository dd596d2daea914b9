//! Construction-time checks for a [`NetworkSpec`].

use log::{debug, trace};
use std::collections::HashSet;

use super::errors::ValidationError;
use super::model::{CptEntry, NetworkSpec};

/// Largest accepted deviation of a variable's probability sum from 1.
pub const SUM_TOLERANCE: f64 = 1e-5;

/// Runs every rule over the specification, stopping at the first violation.
///
/// Distribution and parent rules run variable by variable in specification
/// order; the back-reference chase runs afterwards over the whole network.
pub fn validate_spec(spec: &NetworkSpec) -> Result<(), ValidationError> {
    for (variable, entry) in spec {
        check_distribution(variable, entry)?;
        check_parents_defined(spec, variable, entry)?;
        debug!(
            "{}: {} rows, probability sum {}",
            variable,
            entry.parents.len(),
            entry.prob_sum()
        );
    }
    for (variable, entry) in spec {
        check_back_references(spec, variable, entry)?;
    }
    Ok(())
}

pub fn check_distribution(variable: &str, entry: &CptEntry) -> Result<(), ValidationError> {
    let sum = entry.prob_sum();
    // A NaN sum passes here and is caught by the range rule.
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(ValidationError::DistributionSumMismatch {
            variable: variable.to_string(),
            sum,
        });
    }
    if let Some((index, value)) = entry
        .probs
        .iter()
        .enumerate()
        .find(|(_, p)| !(0.0..=1.0).contains(*p))
    {
        return Err(ValidationError::ProbabilityOutOfRange {
            variable: variable.to_string(),
            index,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn check_parents_defined(
    spec: &NetworkSpec,
    variable: &str,
    entry: &CptEntry,
) -> Result<(), ValidationError> {
    match entry.parents.iter().find(|p| !spec.contains_key(&p.variable)) {
        Some(parent) => Err(ValidationError::UndefinedParent {
            variable: variable.to_string(),
            parent: parent.variable.clone(),
        }),
        None => Ok(()),
    }
}

/// Chases back-references from each parent row of `variable`.
///
/// Starting at the referenced parent, the walk moves to whichever variable the
/// current node's first row pointing at `variable` names, and fails once it
/// lands on a node it has already visited. Every row starts a fresh walk whose
/// visited set already holds `variable`, so self-references and direct
/// two-way references are rejected. Longer cycles are not followed.
///
/// The node the walk revisits is always `variable` itself, so the error's
/// `other` names the node whose back-reference closed the loop instead
/// (`variable` again for a self-reference).
pub fn check_back_references<'a>(
    spec: &'a NetworkSpec,
    variable: &'a str,
    entry: &'a CptEntry,
) -> Result<(), ValidationError> {
    for parent in &entry.parents {
        let mut visited: HashSet<&str> = HashSet::from([variable]);
        let mut from = variable;
        let mut cursor = Some(parent.variable.as_str());
        while let Some(node) = cursor {
            if !visited.insert(node) {
                return Err(ValidationError::CircularDependency {
                    variable: variable.to_string(),
                    other: from.to_string(),
                });
            }
            trace!("{}: back-reference chase {} -> {}", variable, from, node);
            from = node;
            cursor = spec
                .get(node)
                .and_then(|e| e.back_reference(variable))
                .map(|p| p.variable.as_str());
        }
    }
    Ok(())
}
