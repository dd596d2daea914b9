pub mod bayesian_network;
pub mod builder;
pub mod errors;
pub mod loader;
pub mod model;
pub mod query;
pub mod validate;

pub use bayesian_network::NetworkModel;
pub use builder::NetworkBuilder;
pub use errors::{ParseStateError, QueryError, ValidationError};
pub use loader::{load_spec_file, load_spec_str, load_spec_value};
pub use model::{CptEntry, NetworkSpec, ParentRef, State};
pub use query::Query;
