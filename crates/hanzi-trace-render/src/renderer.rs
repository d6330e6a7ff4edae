use std::sync::Arc;

use hanzi_trace_types::AlphaRaster;

/// Shared renderer handle handed to the scorer.
pub type DynGlyphRenderer = Arc<dyn GlyphRenderer>;

/// Trait implemented by all glyph rendering backends.
pub trait GlyphRenderer: Send + Sync {
    /// Stable backend name used for diagnostics.
    fn name(&self) -> &'static str;

    /// Width of `text` rendered at font size `px`, in raster pixels.
    fn measure(&self, text: &str, px: f32) -> f32;

    /// Draws `text` centered into `raster` in filled-plus-stroked style.
    ///
    /// Horizontal centering is at half the raster side; vertically the
    /// baseline is placed so the ascent/descent midline sits at half the
    /// side. `stroke` widens the glyph the way a stroked paint would.
    /// Opacity accumulates with max blending; drawing never fails, text
    /// that falls outside the raster is clipped.
    fn draw_centered(&self, text: &str, px: f32, stroke: f32, raster: &mut AlphaRaster);
}
