use anyhow::{Context, Result};
use cptnet::NetworkModel;
use cptnet::common::setup::{OutputFormat, SpecSource, parse_configuration_options};
use cptnet::common::InferenceReport;
use cptnet::network::load_spec_file;
use cptnet::scenarios::ScenarioFactory;
use log::info;

fn main() -> Result<()> {
    let config = parse_configuration_options();

    let spec = match &config.source {
        SpecSource::File(path) => load_spec_file(path)?,
        SpecSource::Scenario(name) => ScenarioFactory::new_spec(name)?,
    };
    let model = NetworkModel::new(spec).context("Invalid network specification")?;
    info!("Evaluating {} queries", config.queries.len());

    let report = InferenceReport::build(&model, &config.queries);
    match config.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    if report.failures() > 0 {
        info!("{} of {} queries failed", report.failures(), report.queries.len());
    }
    Ok(())
}
