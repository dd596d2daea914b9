use crate::network::{NetworkBuilder, NetworkSpec, State};
use crate::scenarios::ScenarioMaker;

/// `A -> B` with `P(A) = [0.3, 0.7]` and B's rows `(A,0) = 0.2`, `(A,1) = 0.8`.
pub struct TwoNode {}

impl ScenarioMaker for TwoNode {
    fn name(&self) -> &'static str {
        "two_node"
    }

    fn make_spec(&self) -> NetworkSpec {
        NetworkBuilder::new()
            .prior("A", &[0.3, 0.7])
            .conditional("B", &[("A", State::Zero), ("A", State::One)], &[0.2, 0.8])
            .into_spec()
    }
}
