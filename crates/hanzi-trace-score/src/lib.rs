//! Coverage-based handwriting similarity scoring.
//!
//! The pipeline mirrors the practice surface it was built for: fit the
//! captured pen path into the raster interior, rasterize it next to an
//! auto-fitted rendering of the target glyph, then count how many glyph ink
//! samples have user ink within a small Chebyshev radius. Coverage only —
//! stroke order, direction, and stroke count are deliberately not checked.

pub mod fit;
pub mod scorer;
pub mod settings;

pub use fit::FitTransform;
pub use scorer::StrokeScorer;
pub use settings::ScoreSettings;

#[cfg(test)]
mod tests;
