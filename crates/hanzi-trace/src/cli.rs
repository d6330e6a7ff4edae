use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::settings::DEFAULT_THRESHOLD;

/// Tracks which arguments were given on the command line, so file-config
/// values only fill in the gaps.
#[derive(Debug, Default)]
pub struct CliSources {
    pub threshold_from_cli: bool,
}

impl CliSources {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            threshold_from_cli: value_from_cli(matches, "threshold"),
        }
    }
}

fn value_from_cli(matches: &ArgMatches, id: &str) -> bool {
    matches
        .value_source(id)
        .is_some_and(|source| matches!(source, ValueSource::CommandLine))
}

pub fn parse_cli() -> (CliArgs, CliSources) {
    let command = CliArgs::command();
    let matches = command.get_matches();
    let args = match CliArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };
    let sources = CliSources::from_matches(&matches);
    (args, sources)
}

#[derive(Debug, Parser)]
#[command(
    name = "hanzi-trace",
    about = "Score recorded handwriting attempts against a reference glyph",
    disable_help_subcommand = true
)]
pub struct CliArgs {
    /// Lock glyph rendering to a specific backend implementation
    #[arg(short = 'b', long = "backend")]
    pub backend: Option<String>,

    /// Override the configuration file path
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// TTF/OTF font used to render the reference glyph
    #[arg(long = "font", value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Score against this glyph instead of the one stored in the recording
    #[arg(long = "glyph", value_name = "TEXT")]
    pub glyph: Option<String>,

    /// Minimum score counted as a pass
    #[arg(
        long = "threshold",
        id = "threshold",
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub threshold: u32,

    /// Print the list of available rendering backends
    #[arg(long = "list-backends")]
    pub list_backends: bool,

    /// Emit one JSON report per recording instead of plain text
    #[arg(long = "json")]
    pub json: bool,

    /// Print per-metric details for every recording
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Recorded drawings to score (JSON: {"glyph": "...", "points": [[x, y], ...]})
    #[arg(value_name = "RECORDING", required_unless_present = "list_backends")]
    pub recordings: Vec<PathBuf>,
}
