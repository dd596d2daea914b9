pub mod chain;
pub mod factory;
pub mod sprinkler;
pub mod two_node;

use crate::network::NetworkSpec;

/// A named, ready-made network specification.
pub trait ScenarioMaker {
    fn name(&self) -> &'static str;

    fn make_spec(&self) -> NetworkSpec;
}

pub use factory::{ScenarioError, ScenarioFactory};
