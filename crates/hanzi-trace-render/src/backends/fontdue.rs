use std::path::Path;

use fontdue::{Font, FontSettings};

use hanzi_trace_types::{AlphaRaster, RenderError, RenderResult};

use crate::ops::dilate_chebyshev;
use crate::renderer::GlyphRenderer;

/// Glyph rendering backed by a TTF/OTF font parsed with `fontdue`.
///
/// The filled-plus-stroked style of the reference surface is emulated by
/// dilating the rasterized coverage by half the stroke width.
pub struct FontdueRenderer {
    font: Font,
}

impl FontdueRenderer {
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|message| RenderError::backend_failure("fontdue", message))?;
        Ok(Self { font })
    }

    /// Whether the font has real coverage for every character of `text`.
    ///
    /// Characters without coverage rasterize as empty ink and score 0; this
    /// lets callers warn before that happens.
    pub fn covers(&self, text: &str) -> bool {
        text.chars()
            .all(|ch| self.font.lookup_glyph_index(ch) != 0)
    }
}

impl GlyphRenderer for FontdueRenderer {
    fn name(&self) -> &'static str {
        "fontdue"
    }

    fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
    }

    fn draw_centered(&self, text: &str, px: f32, stroke: f32, raster: &mut AlphaRaster) {
        let side = raster.side() as f32;
        let total = self.measure(text, px);
        let (ascent, descent) = match self.font.horizontal_line_metrics(px) {
            Some(metrics) => (metrics.ascent, metrics.descent),
            None => (px * 0.8, px * -0.2),
        };
        // Baseline placed so the ascent/descent midline sits at the buffer
        // center; descent is negative in fontdue's y-up metrics.
        let baseline = side * 0.5 + (ascent + descent) * 0.5;
        let mut pen_x = (side - total) * 0.5;
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, px);
            let left = (pen_x + metrics.xmin as f32).round() as i32;
            let top = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;
            blit_max(raster, &coverage, metrics.width, metrics.height, left, top);
            pen_x += metrics.advance_width;
        }
        let radius = (stroke * 0.5).floor() as usize;
        if radius > 0 {
            let emboldened = dilate_chebyshev(raster.data(), raster.side(), radius);
            raster.data_mut().copy_from_slice(&emboldened);
        }
    }
}

fn blit_max(
    raster: &mut AlphaRaster,
    coverage: &[u8],
    width: usize,
    height: usize,
    left: i32,
    top: i32,
) {
    let side = raster.side() as i32;
    for row in 0..height {
        let y = top + row as i32;
        if y < 0 || y >= side {
            continue;
        }
        for col in 0..width {
            let x = left + col as i32;
            if x < 0 || x >= side {
                continue;
            }
            let value = coverage[row * width + col];
            if value > 0 {
                raster.paint_max(x as usize, y as usize, value);
            }
        }
    }
}
