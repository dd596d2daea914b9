use super::bayesian_network::NetworkModel;
use super::errors::ValidationError;
use super::model::{CptEntry, NetworkSpec, ParentRef, State};

/// Fluent construction of a [`NetworkSpec`].
///
/// ```rust
/// use cptnet::{NetworkBuilder, State};
///
/// let model = NetworkBuilder::new()
///     .prior("Cloudy", &[0.5, 0.5])
///     .conditional("Rain", &[("Cloudy", State::Zero), ("Cloudy", State::One)], &[0.25, 0.75])
///     .build()
///     .unwrap();
/// assert_eq!(model.compact_representation(), "P(Cloudy)P(Rain|CloudyCloudy)");
/// ```
///
/// Declaring a variable twice replaces its entry but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    spec: NetworkSpec,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable without parents.
    pub fn prior(self, name: &str, probs: &[f64]) -> Self {
        self.entry(name, CptEntry::prior(probs.to_vec()))
    }

    /// Adds a variable whose row `i` is `rows[i]` with probability `probs[i]`.
    pub fn conditional(self, name: &str, rows: &[(&str, State)], probs: &[f64]) -> Self {
        let parents = rows
            .iter()
            .map(|&(parent, state)| ParentRef::new(parent, state))
            .collect();
        self.entry(name, CptEntry::new(parents, probs.to_vec()))
    }

    pub fn entry(mut self, name: &str, entry: CptEntry) -> Self {
        self.spec.insert(name.to_string(), entry);
        self
    }

    /// Returns the specification without validating it.
    pub fn into_spec(self) -> NetworkSpec {
        self.spec
    }

    pub fn build(self) -> Result<NetworkModel, ValidationError> {
        NetworkModel::new(self.spec)
    }
}
