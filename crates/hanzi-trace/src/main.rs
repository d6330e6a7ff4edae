use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use hanzi_trace_render::{Backend, Configuration};
use hanzi_trace_score::StrokeScorer;
use hanzi_trace_types::{RenderError, ScoreReport};

use hanzi_trace::cli::parse_cli;
use hanzi_trace::recording::{Recording, RecordingError};
use hanzi_trace::settings::{ConfigError, resolve_settings};

fn main() -> Result<(), CliError> {
    let (args, sources) = parse_cli();

    if args.list_backends {
        print_available_backends();
        return Ok(());
    }

    let settings = resolve_settings(&args, &sources)?;

    let env_backend_present = std::env::var("HANZI_TRACE_BACKEND").is_ok();
    let env_font_present = std::env::var("HANZI_TRACE_FONT").is_ok();
    let mut config = Configuration::from_env().unwrap_or_default();
    // Precedence: command line, then environment, then config file.
    if let Some(name) = args.backend.as_deref() {
        config.backend = Backend::from_str(name)?;
    } else if !env_backend_present {
        if let Some(name) = settings.backend.as_deref() {
            config.backend = Backend::from_str(name)?;
        }
    }
    if args.font.is_some() {
        config.font = args.font.clone();
    } else if !env_font_present {
        if let Some(font) = settings.font.clone() {
            config.font = Some(font);
        }
    }

    let available = Configuration::available_backends();
    if available.is_empty() {
        return Err(RenderError::configuration(
            "no rendering backend available; rebuild with a backend feature such as \"backend-fontdue\"",
        )
        .into());
    }
    if !available.contains(&config.backend) {
        return Err(RenderError::unsupported(config.backend.as_str()).into());
    }

    let renderer = config.create_renderer()?;
    let scorer = StrokeScorer::with_settings(renderer, settings.scorer);

    let mut reports = Vec::new();
    for path in &args.recordings {
        let recording = Recording::load(path)?;
        let glyph = args
            .glyph
            .clone()
            .or_else(|| recording.glyph.clone())
            .unwrap_or_default();
        if glyph.is_empty() {
            eprintln!(
                "warning: {} carries no glyph and --glyph was not given; it scores 0",
                path.display()
            );
        }
        let stroke_path = recording.to_path();
        if stroke_path.is_empty() {
            eprintln!("warning: {} contains no pen samples", path.display());
        }

        let report = scorer.score_report(&stroke_path, &glyph);
        let passed = report.score >= settings.threshold;
        if args.json {
            reports.push(FileReport {
                file: path.display().to_string(),
                glyph,
                passed,
                report,
            });
        } else {
            let verdict = if passed { "pass" } else { "fail" };
            println!("{}: {} ({verdict})", path.display(), report.score);
            if args.verbose {
                for metric in &report.details {
                    println!("  {} = {}", metric.name, metric.value);
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_available_backends() {
    let available = Configuration::available_backends();
    if available.is_empty() {
        println!("no rendering backends compiled in");
        return;
    }
    println!("available backends:");
    for backend in available {
        println!("  {backend}");
    }
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    glyph: String,
    passed: bool,
    #[serde(flatten)]
    report: ScoreReport,
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Render(RenderError),
    Recording(RecordingError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(error) => error.fmt(f),
            CliError::Render(error) => error.fmt(f),
            CliError::Recording(error) => error.fmt(f),
            CliError::Json(error) => write!(f, "failed to serialize reports: {error}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(error) => Some(error),
            CliError::Render(error) => Some(error),
            CliError::Recording(error) => Some(error),
            CliError::Json(error) => Some(error),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        Self::Render(error)
    }
}

impl From<RecordingError> for CliError {
    fn from(error: RecordingError) -> Self {
        Self::Recording(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
