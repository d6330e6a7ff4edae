/// Tunable constants of the scoring pipeline.
///
/// Defaults match the practice surface the scorer ships with: a 200x200
/// comparison raster with a 30px fit margin, the live 25px pen, a 15px
/// glyph stroke, and the deliberately generous 220 multiplier that lets
/// good-enough coverage saturate at the cap.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSettings {
    /// Side length of both comparison rasters, in pixels.
    pub side: usize,
    /// Interior margin the fitted path stays inside.
    pub fit_margin: f32,
    /// Pen width used to stroke the fitted path.
    pub pen_width: f32,
    /// Stroke width applied on top of the filled glyph.
    pub glyph_stroke: f32,
    /// Font size the auto-fit search starts from.
    pub font_start: f32,
    /// Decrement per auto-fit step.
    pub font_step: f32,
    /// Horizontal margin the rendered text must fit inside.
    pub font_margin: f32,
    /// Lower bound that guarantees the auto-fit search terminates.
    pub font_floor: f32,
    /// Stride of the comparison sampling grid, in pixels.
    pub sample_stride: usize,
    /// Opacity above which a sample counts as ink.
    pub ink_threshold: u8,
    /// Chebyshev radius of the nearby-ink tolerance.
    pub neighbor_radius: usize,
    /// Coverage-to-score multiplier; scores clamp at 100.
    pub multiplier: f32,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            side: 200,
            fit_margin: 30.0,
            pen_width: 25.0,
            glyph_stroke: 15.0,
            font_start: 180.0,
            font_step: 5.0,
            font_margin: 60.0,
            font_floor: 10.0,
            sample_stride: 2,
            ink_threshold: 50,
            neighbor_radius: 2,
            multiplier: 220.0,
        }
    }
}
