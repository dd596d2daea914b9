use crate::network::{NetworkBuilder, NetworkSpec, State};
use crate::scenarios::ScenarioMaker;

/// The classic lawn network in row form.
///
/// ```text
///      Cloudy
///      ↙     ↘
/// Sprinkler   Rain
///        ↘    ↙
///       WetGrass
/// ```
pub struct Sprinkler {}

impl ScenarioMaker for Sprinkler {
    fn name(&self) -> &'static str {
        "sprinkler"
    }

    fn make_spec(&self) -> NetworkSpec {
        NetworkBuilder::new()
            .prior("Cloudy", &[0.5, 0.5])
            .conditional(
                "Sprinkler",
                &[("Cloudy", State::Zero), ("Cloudy", State::One)],
                &[0.7, 0.3],
            )
            .conditional(
                "Rain",
                &[("Cloudy", State::Zero), ("Cloudy", State::One)],
                &[0.25, 0.75],
            )
            .conditional(
                "WetGrass",
                &[
                    ("Sprinkler", State::Zero),
                    ("Sprinkler", State::One),
                    ("Rain", State::Zero),
                    ("Rain", State::One),
                ],
                &[0.1, 0.4, 0.1, 0.4],
            )
            .into_spec()
    }
}
