//! glyphcut: glyph sprite toolkit.
//! Features: font measurement (TrueType via ab_glyph, built-in bitmap fallback),
//! fixed-cell placement, PNG export of one sprite per character.

pub mod builtin;
pub mod canvas;
mod error;
pub mod export;
mod font;
pub mod glyph;
mod ttf;
pub use builtin::BuiltinFont;
pub use canvas::{Canvas, Color, GlyphTarget};
pub use error::{FontError, Result};
pub use export::{ExportOptions, ExportProgress, ExportSummary, Exporter, GlyphFailure, GlyphRecord};
pub use font::Font;
pub use glyph::{Alignment, BoundingBox, Placement, NO_CENTER_CHARS};
pub use ttf::TrueTypeFont;

// Test utilities
pub mod test_support;
