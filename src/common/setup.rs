use clap::{Arg, ArgGroup, ArgMatches, Command, ValueEnum, builder::EnumValueParser};
use env_logger::{Builder, Env};
use serde::Deserialize;
use std::io::Write;

/// How query results are printed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// One coloured line per query
    #[serde(rename = "text")]
    Text,

    /// A single JSON report
    #[serde(rename = "json")]
    Json,
}

/// Where the network comes from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum SpecSource {
    File(String),
    Scenario(String),
}

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub source: SpecSource,
    pub queries: Vec<String>,
    pub format: OutputFormat,
}

/// Logs go to stderr as `LEVEL [file:line] message`, filtered by `RUST_LOG`.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
}

pub fn command() -> Command {
    Command::new("cptnet")
        .version("0.1")
        .about("Validates binary Bayesian networks and answers point queries by enumeration.")
        .arg(
            Arg::new("spec")
                .long("spec")
                .value_name("FILE")
                .help("JSON specification mapping each variable to its parents and probs"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .value_name("NAME")
                .help("Built-in network: two_node, chain or sprinkler"),
        )
        .group(
            ArgGroup::new("source")
                .args(["spec", "scenario"])
                .required(true),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("QUERY")
                .help("Query such as `B` or `B|A=1,C=0` (repeatable)")
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Output format: 'text' or 'json'")
                .default_value("text"),
        )
}

pub fn options_from_matches(matches: &ArgMatches) -> CommandLineOptions {
    let source = match matches.get_one::<String>("spec") {
        Some(path) => SpecSource::File(path.clone()),
        // the `source` group guarantees one of the two is present
        None => SpecSource::Scenario(
            matches
                .get_one::<String>("scenario")
                .cloned()
                .unwrap_or_default(),
        ),
    };
    let queries = matches
        .get_many::<String>("query")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Text);

    CommandLineOptions {
        source,
        queries,
        format,
    }
}

pub fn parse_configuration_options() -> CommandLineOptions {
    init_logging();
    options_from_matches(&command().get_matches())
}
