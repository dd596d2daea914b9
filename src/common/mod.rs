pub mod report;
pub mod setup;

pub use report::{InferenceReport, QueryOutcome};
pub use setup::{CommandLineOptions, OutputFormat, SpecSource};
