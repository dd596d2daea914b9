//! Reads a specification from its JSON form.
//!
//! The document is an object keyed by variable name, in the order the
//! variables should appear in the factorization:
//!
//! ```json
//! {
//!     "A": { "parents": [], "probs": [0.3, 0.7] },
//!     "B": { "parents": [["A", "0"], ["A", "1"]], "probs": [0.2, 0.8] }
//! }
//! ```
//!
//! Probabilities must be written as floats (`1.0`, not `1`) and every parent
//! must be a two-element array of strings.

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::errors::ValidationError;
use super::model::{CptEntry, NetworkSpec, ParentRef};
use super::validate::SUM_TOLERANCE;

pub fn load_spec_str(json: &str) -> Result<NetworkSpec> {
    let value: Value = serde_json::from_str(json).context("Failed to parse specification JSON")?;
    Ok(load_spec_value(&value)?)
}

pub fn load_spec_file(path: impl AsRef<Path>) -> Result<NetworkSpec> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read specification file {}", path.display()))?;
    debug!("Loaded {} bytes from {}", json.len(), path.display());
    load_spec_str(&json)
}

/// Converts a JSON document into a typed specification.
///
/// Checks each entry completely before moving to the next, in document order:
/// its shape, the probability sum, the float type and range of each
/// probability, the parent pairs, then that every parent is a key of the
/// document. Cycles are left to [`NetworkModel::new`](super::NetworkModel::new).
pub fn load_spec_value(value: &Value) -> Result<NetworkSpec, ValidationError> {
    let object = value
        .as_object()
        .ok_or(ValidationError::MalformedSpecification)?;
    let mut spec = NetworkSpec::with_capacity(object.len());
    for (variable, record) in object {
        let entry = entry_from_value(variable, record)?;
        if let Some(parent) = entry.parents.iter().find(|p| !object.contains_key(&p.variable)) {
            return Err(ValidationError::UndefinedParent {
                variable: variable.clone(),
                parent: parent.variable.clone(),
            });
        }
        spec.insert(variable.clone(), entry);
    }
    Ok(spec)
}

fn entry_from_value(variable: &str, record: &Value) -> Result<CptEntry, ValidationError> {
    let malformed = |reason: &str| ValidationError::MalformedEntry {
        variable: variable.to_string(),
        reason: reason.to_string(),
    };
    let record = record
        .as_object()
        .ok_or_else(|| malformed("expected an object with `parents` and `probs`"))?;
    let raw_probs = record
        .get("probs")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("`probs` must be an array"))?;
    let raw_parents = record
        .get("parents")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("`parents` must be an array"))?;

    let probs = probabilities_from_values(variable, raw_probs)?;
    let parents = raw_parents
        .iter()
        .enumerate()
        .map(|(index, raw)| parent_from_value(variable, index, raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CptEntry::new(parents, probs))
}

fn probabilities_from_values(variable: &str, raw: &[Value]) -> Result<Vec<f64>, ValidationError> {
    let out_of_range = |index: usize, value: &Value| ValidationError::ProbabilityOutOfRange {
        variable: variable.to_string(),
        index,
        value: value.to_string(),
    };

    // The sum rule sees integer values too; only afterwards are they rejected.
    let mut sum = 0.0;
    for (index, value) in raw.iter().enumerate() {
        sum += value.as_f64().ok_or_else(|| out_of_range(index, value))?;
    }
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(ValidationError::DistributionSumMismatch {
            variable: variable.to_string(),
            sum,
        });
    }

    raw.iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Number(n) if n.is_f64() => n
                .as_f64()
                .filter(|p| (0.0..=1.0).contains(p))
                .ok_or_else(|| out_of_range(index, value)),
            _ => Err(out_of_range(index, value)),
        })
        .collect()
}

fn parent_from_value(variable: &str, index: usize, raw: &Value) -> Result<ParentRef, ValidationError> {
    let malformed = || ValidationError::MalformedParentReference {
        variable: variable.to_string(),
        index,
        found: raw.to_string(),
    };
    match raw.as_array().map(Vec::as_slice) {
        Some([Value::String(name), Value::String(state)]) => {
            let state = state.parse().map_err(|_| malformed())?;
            Ok(ParentRef::new(name.clone(), state))
        }
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::model::State;
    use serde_json::json;

    #[test]
    fn test_load_keeps_document_order() {
        let spec = load_spec_value(&json!({
            "Z": { "parents": [], "probs": [0.5, 0.5] },
            "A": { "parents": [["Z", "1"]], "probs": [1.0] }
        }))
        .unwrap();
        assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["Z", "A"]);
        assert_eq!(spec["A"].parents, vec![ParentRef::new("Z", State::One)]);
    }

    #[test]
    fn test_integer_probability_rejected() {
        let result = load_spec_value(&json!({
            "A": { "parents": [], "probs": [0, 1] }
        }));
        assert_eq!(
            result,
            Err(ValidationError::ProbabilityOutOfRange {
                variable: "A".to_string(),
                index: 0,
                value: "0".to_string(),
            })
        );
    }

    #[test]
    fn test_integer_sum_checked_first() {
        let result = load_spec_value(&json!({
            "A": { "parents": [], "probs": [1, 1] }
        }));
        assert!(matches!(
            result,
            Err(ValidationError::DistributionSumMismatch { sum, .. }) if sum == 2.0
        ));
    }

    #[test]
    fn test_non_numeric_probability_rejected() {
        let result = load_spec_value(&json!({
            "A": { "parents": [], "probs": ["0.5", 0.5] }
        }));
        assert!(matches!(
            result,
            Err(ValidationError::ProbabilityOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_parent_pairs() {
        for parent in [json!(["A"]), json!(["A", 1]), json!(["A", "1", "x"]), json!("A"), json!(["A", "2"])] {
            let result = load_spec_value(&json!({
                "A": { "parents": [], "probs": [0.5, 0.5] },
                "B": { "parents": [parent], "probs": [1.0] }
            }));
            assert!(
                matches!(
                    result,
                    Err(ValidationError::MalformedParentReference { ref variable, index: 0, .. }) if variable == "B"
                ),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn test_earlier_undefined_parent_wins() {
        let result = load_spec_value(&json!({
            "A": { "parents": [["Ghost", "1"]], "probs": [1.0] },
            "B": { "parents": [], "probs": [0, 1] }
        }));
        assert_eq!(
            result,
            Err(ValidationError::UndefinedParent {
                variable: "A".to_string(),
                parent: "Ghost".to_string(),
            })
        );
    }

    #[test]
    fn test_parent_declared_later_is_defined() {
        let spec = load_spec_value(&json!({
            "B": { "parents": [["A", "1"]], "probs": [1.0] },
            "A": { "parents": [], "probs": [0.5, 0.5] }
        }))
        .unwrap();
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_malformed_entries() {
        assert_eq!(
            load_spec_value(&json!([1, 2])),
            Err(ValidationError::MalformedSpecification)
        );
        assert!(matches!(
            load_spec_value(&json!({ "A": { "probs": [1.0] } })),
            Err(ValidationError::MalformedEntry { .. })
        ));
        assert!(matches!(
            load_spec_value(&json!({ "A": [1.0] })),
            Err(ValidationError::MalformedEntry { .. })
        ));
    }
}
