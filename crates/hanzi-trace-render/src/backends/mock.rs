use hanzi_trace_types::AlphaRaster;

use crate::renderer::GlyphRenderer;

/// Deterministic glyph renderer for tests and CI.
///
/// Every non-whitespace character renders as a hollow box filling its em
/// square, so the measured width scales linearly with the font size and a
/// traced outline lands exactly on the ink. Whitespace advances without
/// drawing, which exercises the empty-ink path of the scorer.
#[derive(Debug, Clone, Default)]
pub struct MockRenderer;

impl GlyphRenderer for MockRenderer {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars().count() as f32 * px
    }

    fn draw_centered(&self, text: &str, px: f32, stroke: f32, raster: &mut AlphaRaster) {
        let side = raster.side() as f32;
        let total = self.measure(text, px);
        let thickness = stroke.max(1.0);
        let mut pen_x = (side - total) * 0.5;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                draw_box_ring(raster, pen_x, (side - px) * 0.5, px, thickness);
            }
            pen_x += px;
        }
    }
}

fn draw_box_ring(raster: &mut AlphaRaster, left: f32, top: f32, size: f32, thickness: f32) {
    let side = raster.side() as i32;
    let x0 = left.round() as i32;
    let y0 = top.round() as i32;
    let x1 = (left + size).round() as i32 - 1;
    let y1 = (top + size).round() as i32 - 1;
    for y in y0.max(0)..=y1.min(side - 1) {
        for x in x0.max(0)..=x1.min(side - 1) {
            let edge = (x - x0).min(x1 - x).min(y - y0).min(y1 - y);
            if (edge as f32) < thickness {
                raster.paint_max(x as usize, y as usize, 255);
            }
        }
    }
}
