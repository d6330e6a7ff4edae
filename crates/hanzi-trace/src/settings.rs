use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use hanzi_trace_score::ScoreSettings;

use crate::cli::{CliArgs, CliSources};

/// Reward cut-off of the practice app.
pub const DEFAULT_THRESHOLD: u32 = 80;

const PROJECT_CONFIG_FILE: &str = "hanzi-trace.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    backend: Option<String>,
    font: Option<String>,
    threshold: Option<u32>,
    scorer: Option<ScorerFileConfig>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
struct ScorerFileConfig {
    side: Option<usize>,
    fit_margin: Option<f32>,
    pen_width: Option<f32>,
    glyph_stroke: Option<f32>,
    font_start: Option<f32>,
    font_step: Option<f32>,
    font_margin: Option<f32>,
    font_floor: Option<f32>,
    sample_stride: Option<usize>,
    ink_threshold: Option<u8>,
    neighbor_radius: Option<usize>,
    multiplier: Option<f32>,
}

#[derive(Debug)]
pub struct EffectiveSettings {
    pub backend: Option<String>,
    pub font: Option<PathBuf>,
    pub threshold: u32,
    pub scorer: ScoreSettings,
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: Option<PathBuf>,
        field: &'static str,
        value: String,
    },
    NotFound {
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(
                    f,
                    "failed to read config file {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "failed to parse config file {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, field, value } => {
                if let Some(path) = path {
                    write!(
                        f,
                        "invalid value '{}' for '{}' in {}",
                        value,
                        field,
                        path.display()
                    )
                } else {
                    write!(f, "invalid value '{}' for '{}'", value, field)
                }
            }
            ConfigError::NotFound { path } => {
                write!(f, "config file {} does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
            ConfigError::NotFound { .. } => None,
        }
    }
}

pub fn resolve_settings(
    cli: &CliArgs,
    sources: &CliSources,
) -> Result<EffectiveSettings, ConfigError> {
    let (file, config_path) = load_config(cli.config.as_deref())?;
    merge(cli, sources, file, config_path)
}

fn load_config(path_override: Option<&Path>) -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = path_override {
        let path = path.to_path_buf();
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        let config = read_config(&path)?;
        return Ok((config, Some(path)));
    }

    if let Some(project_path) = project_config_path() {
        if project_path.exists() {
            let config = read_config(&project_path)?;
            return Ok((config, Some(project_path)));
        }
    }

    let Some(default_path) = default_config_path() else {
        return Ok((FileConfig::default(), None));
    };
    if !default_path.exists() {
        return Ok((FileConfig::default(), None));
    }
    let config = read_config(&default_path)?;
    Ok((config, Some(default_path)))
}

fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn merge(
    cli: &CliArgs,
    sources: &CliSources,
    file: FileConfig,
    config_path: Option<PathBuf>,
) -> Result<EffectiveSettings, ConfigError> {
    let config_dir = config_path
        .as_ref()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()));

    let FileConfig {
        backend: file_backend,
        font: file_font,
        threshold: file_threshold,
        scorer: file_scorer,
    } = file;

    let mut backend = normalize_string(cli.backend.clone());
    if backend.is_none() {
        backend = normalize_string(file_backend);
    }

    let mut font = cli.font.clone();
    if font.is_none() {
        font = normalize_string(file_font)
            .map(|value| resolve_path_from_config(value, config_dir.as_deref()));
    }

    let mut threshold = cli.threshold;
    if !sources.threshold_from_cli {
        if let Some(value) = file_threshold {
            if value > 100 {
                return Err(ConfigError::InvalidValue {
                    path: config_path,
                    field: "threshold",
                    value: value.to_string(),
                });
            }
            threshold = value;
        }
    }

    let scorer = merge_scorer(file_scorer.unwrap_or_default(), config_path.as_deref())?;

    Ok(EffectiveSettings {
        backend,
        font,
        threshold,
        scorer,
    })
}

fn merge_scorer(
    file: ScorerFileConfig,
    config_path: Option<&Path>,
) -> Result<ScoreSettings, ConfigError> {
    let mut scorer = ScoreSettings::default();
    if let Some(value) = file.side {
        if value == 0 {
            return Err(invalid_value(config_path, "scorer.side", value.to_string()));
        }
        scorer.side = value;
    }
    if let Some(value) = file.sample_stride {
        if value == 0 {
            return Err(invalid_value(
                config_path,
                "scorer.sample_stride",
                value.to_string(),
            ));
        }
        scorer.sample_stride = value;
    }
    if let Some(value) = file.font_step {
        // A non-positive step would stall the auto-fit search.
        if value <= 0.0 {
            return Err(invalid_value(
                config_path,
                "scorer.font_step",
                value.to_string(),
            ));
        }
        scorer.font_step = value;
    }
    if let Some(value) = file.multiplier {
        if value < 0.0 {
            return Err(invalid_value(
                config_path,
                "scorer.multiplier",
                value.to_string(),
            ));
        }
        scorer.multiplier = value;
    }
    if let Some(value) = file.fit_margin {
        scorer.fit_margin = value;
    }
    if let Some(value) = file.pen_width {
        scorer.pen_width = value;
    }
    if let Some(value) = file.glyph_stroke {
        scorer.glyph_stroke = value;
    }
    if let Some(value) = file.font_start {
        scorer.font_start = value;
    }
    if let Some(value) = file.font_margin {
        scorer.font_margin = value;
    }
    if let Some(value) = file.font_floor {
        scorer.font_floor = value;
    }
    if let Some(value) = file.ink_threshold {
        scorer.ink_threshold = value;
    }
    if let Some(value) = file.neighbor_radius {
        scorer.neighbor_radius = value;
    }
    Ok(scorer)
}

fn invalid_value(path: Option<&Path>, field: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        path: path.map(|p| p.to_path_buf()),
        field,
        value,
    }
}

fn normalize_string(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn resolve_path_from_config(value: String, config_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        return path;
    }
    match config_dir {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hanzi-trace").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli_args() -> CliArgs {
        CliArgs {
            backend: None,
            config: None,
            font: None,
            glyph: None,
            threshold: DEFAULT_THRESHOLD,
            list_backends: false,
            json: false,
            verbose: false,
            recordings: Vec::new(),
        }
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn file_values_fill_in_gaps() {
        let (_dir, path) = write_config(
            "backend = \"mock\"\nthreshold = 60\n\n[scorer]\nside = 100\nneighbor_radius = 3\n",
        );
        let mut cli = cli_args();
        cli.config = Some(path);
        let settings = resolve_settings(&cli, &CliSources::default()).expect("settings");
        assert_eq!(settings.backend.as_deref(), Some("mock"));
        assert_eq!(settings.threshold, 60);
        assert_eq!(settings.scorer.side, 100);
        assert_eq!(settings.scorer.neighbor_radius, 3);
        // Untouched fields keep their defaults.
        assert_eq!(settings.scorer.sample_stride, 2);
    }

    #[test]
    fn cli_threshold_wins_over_file() {
        let (_dir, path) = write_config("threshold = 60\n");
        let mut cli = cli_args();
        cli.config = Some(path);
        cli.threshold = 95;
        let sources = CliSources {
            threshold_from_cli: true,
        };
        let settings = resolve_settings(&cli, &sources).expect("settings");
        assert_eq!(settings.threshold, 95);
    }

    #[test]
    fn font_paths_resolve_relative_to_the_config_file() {
        let (dir, path) = write_config("font = \"fonts/kai.ttf\"\n");
        let mut cli = cli_args();
        cli.config = Some(path);
        let settings = resolve_settings(&cli, &CliSources::default()).expect("settings");
        assert_eq!(settings.font, Some(dir.path().join("fonts/kai.ttf")));
    }

    #[test]
    fn zero_sample_stride_is_rejected() {
        let (_dir, path) = write_config("[scorer]\nsample_stride = 0\n");
        let mut cli = cli_args();
        cli.config = Some(path);
        let error = resolve_settings(&cli, &CliSources::default()).expect_err("must fail");
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn missing_override_path_is_reported() {
        let mut cli = cli_args();
        cli.config = Some(PathBuf::from("/nonexistent/hanzi-trace.toml"));
        let error = resolve_settings(&cli, &CliSources::default()).expect_err("must fail");
        assert!(matches!(error, ConfigError::NotFound { .. }));
    }
}
