use thiserror::Error;

use crate::network::NetworkSpec;
use crate::scenarios::ScenarioMaker;

use super::{chain::Chain, sprinkler::Sprinkler, two_node::TwoNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("Unknown scenario: {0} (available: {available})", available = ScenarioFactory::NAMES.join(", "))]
    UnknownScenario(String),
}

pub struct ScenarioFactory;

impl ScenarioFactory {
    pub const NAMES: [&'static str; 3] = ["two_node", "chain", "sprinkler"];

    pub fn new_boxed(name: &str) -> Result<Box<dyn ScenarioMaker>, ScenarioError> {
        match name {
            "two_node" => Ok(Box::new(TwoNode {})),
            "chain" => Ok(Box::new(Chain {})),
            "sprinkler" => Ok(Box::new(Sprinkler {})),
            _ => Err(ScenarioError::UnknownScenario(name.to_string())),
        }
    }

    pub fn new_spec(name: &str) -> Result<NetworkSpec, ScenarioError> {
        Ok(Self::new_boxed(name)?.make_spec())
    }
}
