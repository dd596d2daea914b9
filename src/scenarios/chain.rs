use crate::network::{NetworkBuilder, NetworkSpec, State};
use crate::scenarios::ScenarioMaker;

/// Three variables in a line: `A -> B -> C`.
pub struct Chain {}

impl ScenarioMaker for Chain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn make_spec(&self) -> NetworkSpec {
        NetworkBuilder::new()
            .prior("A", &[0.4, 0.6])
            .conditional("B", &[("A", State::Zero), ("A", State::One)], &[0.3, 0.7])
            .conditional("C", &[("B", State::Zero), ("B", State::One)], &[0.9, 0.1])
            .into_spec()
    }
}
