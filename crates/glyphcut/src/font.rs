use std::path::Path;

use crate::{
    builtin::BuiltinFont, canvas::GlyphTarget, glyph::BoundingBox, ttf::TrueTypeFont, FontError,
    Result,
};

/// Unified font enum over the supported rasterizer backends.
pub enum Font {
    TrueType(TrueTypeFont),
    Builtin(BuiltinFont),
}

impl Font {
    pub fn name(&self) -> &str {
        match self {
            Font::TrueType(f) => &f.name,
            Font::Builtin(_) => BuiltinFont::NAME,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    pub fn has_char(&self, ch: char) -> bool {
        match self {
            Font::TrueType(f) => f.has_char(ch),
            Font::Builtin(f) => f.has_char(ch),
        }
    }

    /// Bounding box of the glyph's ink relative to the text origin.
    pub fn measure(&self, ch: char) -> Result<BoundingBox> {
        match self {
            Font::TrueType(f) => f.measure(ch),
            Font::Builtin(f) => f.measure(ch),
        }
    }

    /// Draw `ch` with its text origin at `(x, y)`.
    pub fn render<T: GlyphTarget>(&self, target: &mut T, x: i32, y: i32, ch: char) -> Result<()> {
        match self {
            Font::TrueType(f) => f.render(target, x, y, ch),
            Font::Builtin(f) => f.render(target, x, y, ch),
        }
    }

    pub fn builtin() -> Self {
        Font::Builtin(BuiltinFont)
    }

    pub fn load(name: &str, bytes: Vec<u8>, size: f32) -> Result<Self> {
        Ok(Font::TrueType(TrueTypeFont::from_bytes(name, bytes, size)?))
    }

    pub fn load_file(path: &Path, size: f32) -> Result<Self> {
        Ok(Font::TrueType(TrueTypeFont::load_file(path, size)?))
    }

    /// Load a font file, falling back to the built-in font if it can't be
    /// read or parsed. The load error is handed back alongside the fallback.
    pub fn open_or_builtin(path: &Path, size: f32) -> (Self, Option<FontError>) {
        match Self::load_file(path, size) {
            Ok(font) => (font, None),
            Err(err) => {
                log::warn!(
                    "Font file '{}' not usable ({err}). Using default font.",
                    path.display()
                );
                (Self::builtin(), Some(err))
            }
        }
    }
}
