use hanzi_trace_render::ops::dilate_chebyshev;
use hanzi_trace_render::{DynGlyphRenderer, stroke_polyline};
use hanzi_trace_types::{AlphaRaster, PenPoint, ReportMetric, ScoreReport, StrokePath};

use crate::fit::FitTransform;
use crate::settings::ScoreSettings;

const MAX_SCORE: u32 = 100;

/// Coverage-based similarity scorer for handwritten glyph tracings.
///
/// A pure function of the path, the glyph, and the settings: no external
/// state, no randomness, identical calls return identical results.
pub struct StrokeScorer {
    renderer: DynGlyphRenderer,
    settings: ScoreSettings,
}

impl StrokeScorer {
    pub fn new(renderer: DynGlyphRenderer) -> Self {
        Self::with_settings(renderer, ScoreSettings::default())
    }

    pub fn with_settings(renderer: DynGlyphRenderer, settings: ScoreSettings) -> Self {
        Self { renderer, settings }
    }

    pub fn settings(&self) -> &ScoreSettings {
        &self.settings
    }

    /// Scores `path` against `glyph`, returning an integer in [0, 100].
    ///
    /// An empty path or an empty glyph scores 0 without rasterizing.
    pub fn score(&self, path: &StrokePath, glyph: &str) -> u32 {
        self.score_report(path, glyph).score
    }

    /// Scores `path` against `glyph` with per-metric diagnostics attached.
    pub fn score_report(&self, path: &StrokePath, glyph: &str) -> ScoreReport {
        let has_strokes = !path.is_empty();
        if glyph.is_empty() || !has_strokes {
            return ScoreReport::new(0, has_strokes);
        }

        // The two rasters have no data dependency on each other.
        let (user, (target, font_px)) = rayon::join(
            || self.rasterize_path(path),
            || self.rasterize_glyph(glyph),
        );

        let (matches, target_samples) = self.count_coverage(&user, &target);
        if target_samples == 0 {
            // The glyph rendered with no visible ink (whitespace or a
            // character the font has no coverage for).
            return ScoreReport::with_details(
                0,
                has_strokes,
                vec![
                    ReportMetric::new("font_px", font_px),
                    ReportMetric::new("target_samples", 0.0),
                ],
            );
        }

        let coverage = (matches as f32 / target_samples as f32).max(0.0);
        let score = ((coverage * self.settings.multiplier).floor() as u32).min(MAX_SCORE);
        ScoreReport::with_details(
            score,
            has_strokes,
            vec![
                ReportMetric::new("coverage", coverage),
                ReportMetric::new("matches", matches as f32),
                ReportMetric::new("target_samples", target_samples as f32),
                ReportMetric::new("font_px", font_px),
                ReportMetric::new("multiplier", self.settings.multiplier),
            ],
        )
    }

    fn rasterize_path(&self, path: &StrokePath) -> AlphaRaster {
        let settings = &self.settings;
        let mut raster = AlphaRaster::new(settings.side);
        let Some(bounds) = path.bounds() else {
            return raster;
        };
        let fit = FitTransform::rect_to_square(
            &bounds,
            settings.fit_margin,
            settings.side as f32 - settings.fit_margin,
        );
        let fitted: Vec<PenPoint> = path.points().iter().map(|&point| fit.apply(point)).collect();
        stroke_polyline(&mut raster, &fitted, settings.pen_width);
        raster
    }

    fn rasterize_glyph(&self, glyph: &str) -> (AlphaRaster, f32) {
        let settings = &self.settings;
        let font_px = self.fit_font_size(glyph);
        let mut raster = AlphaRaster::new(settings.side);
        self.renderer
            .draw_centered(glyph, font_px, settings.glyph_stroke, &mut raster);
        (raster, font_px)
    }

    /// Shrinks the font size from `font_start` until the rendered width fits
    /// inside the horizontal margin. The floor bounds the search for
    /// arbitrarily wide strings.
    fn fit_font_size(&self, glyph: &str) -> f32 {
        let settings = &self.settings;
        let limit = settings.side as f32 - settings.font_margin;
        let mut px = settings.font_start;
        while self.renderer.measure(glyph, px) > limit && px - settings.font_step >= settings.font_floor
        {
            px -= settings.font_step;
        }
        px
    }

    fn count_coverage(&self, user: &AlphaRaster, target: &AlphaRaster) -> (usize, usize) {
        let settings = &self.settings;
        let side = settings.side;
        let stride = settings.sample_stride.max(1);
        let threshold = settings.ink_threshold;
        // Pre-dilating the user ink by the tolerance radius turns the
        // per-sample neighborhood probe into a single lookup.
        let nearby = dilate_chebyshev(user.data(), side, settings.neighbor_radius);
        let mut matches = 0usize;
        let mut target_samples = 0usize;
        for y in (0..side).step_by(stride) {
            let row = y * side;
            for x in (0..side).step_by(stride) {
                if target.data()[row + x] > threshold {
                    target_samples += 1;
                    if nearby[row + x] > threshold {
                        matches += 1;
                    }
                }
            }
        }
        (matches, target_samples)
    }
}
