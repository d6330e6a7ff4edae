use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use hanzi_trace_types::{PenPoint, StrokePath};

/// A drawing captured by the practice surface: the glyph that was shown and
/// the pen samples of the attempt, in surface coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub glyph: Option<String>,
    #[serde(default)]
    pub points: Vec<[f32; 2]>,
}

impl Recording {
    pub fn load(path: &Path) -> Result<Self, RecordingError> {
        let contents = fs::read_to_string(path).map_err(|source| RecordingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| RecordingError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_path(&self) -> StrokePath {
        StrokePath::from_points(
            self.points
                .iter()
                .map(|&[x, y]| PenPoint::new(x, y))
                .collect(),
        )
    }
}

#[derive(Debug)]
pub enum RecordingError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingError::Io { path, source } => {
                write!(f, "failed to read recording {}: {}", path.display(), source)
            }
            RecordingError::Parse { path, source } => {
                write!(
                    f,
                    "failed to parse recording {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for RecordingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordingError::Io { source, .. } => Some(source),
            RecordingError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_glyph_and_points() {
        let recording: Recording =
            serde_json::from_str(r#"{"glyph": "你", "points": [[1.0, 2.0], [3.5, 4.5]]}"#)
                .expect("valid recording");
        assert_eq!(recording.glyph.as_deref(), Some("你"));
        let path = recording.to_path();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[1], PenPoint::new(3.5, 4.5));
    }

    #[test]
    fn glyph_and_points_are_optional() {
        let recording: Recording = serde_json::from_str("{}").expect("empty recording");
        assert!(recording.glyph.is_none());
        assert!(recording.to_path().is_empty());
    }
}
