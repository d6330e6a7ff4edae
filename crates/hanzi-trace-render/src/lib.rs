//! Glyph and pen-path rasterization for the hanzi-trace workspace.
//!
//! The scorer consumes exactly two capabilities from here: measuring rendered
//! text width at a font size and drawing that text centered into an opacity
//! buffer, plus a polyline stroker for the captured pen path. Glyph backends
//! are feature-gated so the scorer can be exercised without a real font.

pub mod backends;
pub mod config;
pub mod ops;
pub mod renderer;
pub mod stroke;

pub use config::{Backend, Configuration};
pub use renderer::{DynGlyphRenderer, GlyphRenderer};
pub use stroke::stroke_polyline;
