//! Shared domain models for the hanzi-trace workspace.
//!
//! This crate centralizes the lightweight data structures used across the
//! render, score, and CLI crates. Keep it backend-agnostic and free of font
//! rasterizers or CLI machinery so every crate can depend on it cheaply.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// A single pen sample in the coordinate space of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenPoint {
    pub x: f32,
    pub y: f32,
}

impl PenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a stroke path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl PathBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// Continuous pen trajectory captured from a drawing surface.
///
/// Pen-down and pen-up segments are merged into one polyline; stroke
/// separation is deliberately not modeled.
#[derive(Debug, Clone, Default)]
pub struct StrokePath {
    points: Vec<PenPoint>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<PenPoint>) -> Self {
        Self { points }
    }

    /// Appends the next pen sample.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push(PenPoint::new(x, y));
    }

    /// Resets the path; called whenever the target glyph changes or the
    /// canvas is cleared.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PenPoint] {
        &self.points
    }

    pub fn bounds(&self) -> Option<PathBounds> {
        let first = self.points.first()?;
        let mut bounds = PathBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for point in &self.points[1..] {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }
}

/// Square grid of 8-bit opacity samples used as a comparison surface.
#[derive(Clone)]
pub struct AlphaRaster {
    side: usize,
    data: Vec<u8>,
}

impl fmt::Debug for AlphaRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaRaster")
            .field("side", &self.side)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl AlphaRaster {
    /// A fully transparent raster of the given side length.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            data: vec![0; side * side],
        }
    }

    pub fn from_owned(side: usize, data: Vec<u8>) -> RenderResult<Self> {
        let required = side
            .checked_mul(side)
            .ok_or_else(|| RenderError::InvalidRaster {
                reason: "calculated raster length overflowed".into(),
            })?;
        if data.len() != required {
            return Err(RenderError::InvalidRaster {
                reason: format!(
                    "raster byte count mismatch: got {} expected {}",
                    data.len(),
                    required
                ),
            });
        }
        Ok(Self { side, data })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.side && y < self.side);
        self.data[y * self.side + x]
    }

    /// Accumulates opacity with max blending.
    pub fn paint_max(&mut self, x: usize, y: usize, value: u8) {
        debug_assert!(x < self.side && y < self.side);
        let index = y * self.side + x;
        if value > self.data[index] {
            self.data[index] = value;
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("backend {backend} is not supported in this build")]
    Unsupported { backend: &'static str },

    #[error("{backend} backend failed: {message}")]
    BackendFailure {
        backend: &'static str,
        message: String,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("invalid raster: {reason}")]
    InvalidRaster { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn unsupported(backend: &'static str) -> Self {
        Self::Unsupported { backend }
    }

    pub fn backend_failure(backend: &'static str, message: impl Into<String>) -> Self {
        Self::BackendFailure {
            backend,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Individual diagnostic metric emitted alongside a score.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetric {
    pub name: &'static str,
    pub value: f32,
}

impl ReportMetric {
    pub fn new(name: &'static str, value: f32) -> Self {
        Self { name, value }
    }
}

/// Outcome of one scoring attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Coverage score in [0, 100].
    pub score: u32,
    /// Whether the attempt contained any pen samples at all.
    pub has_strokes: bool,
    pub details: Vec<ReportMetric>,
}

impl ScoreReport {
    pub fn new(score: u32, has_strokes: bool) -> Self {
        Self {
            score,
            has_strokes,
            details: Vec::new(),
        }
    }

    pub fn with_details(score: u32, has_strokes: bool, details: Vec<ReportMetric>) -> Self {
        Self {
            score,
            has_strokes,
            details,
        }
    }
}
