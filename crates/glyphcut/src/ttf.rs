//! Scalable TrueType/OpenType fonts rasterized with `ab_glyph`.
use std::path::Path;

use ab_glyph::{point, Font as _, FontVec, GlyphId, PxScale, ScaleFont};

use crate::{canvas::GlyphTarget, glyph::BoundingBox, FontError, Result};

pub struct TrueTypeFont {
    pub name: String,
    font: FontVec,
    scale: PxScale,
    ascent: f32,
}

impl TrueTypeFont {
    /// Parse font data; `size` is the em size in pixels.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>, size: f32) -> Result<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(FontError::InvalidFont(format!("invalid font size {size}")));
        }
        let font = FontVec::try_from_vec(bytes).map_err(|e| FontError::InvalidFont(e.to_string()))?;
        // ab_glyph scales by ascent - descent, convert so that one em == size px
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| FontError::InvalidFont("missing units per em".to_string()))?;
        let px = size * font.height_unscaled() / units_per_em;
        let scale = PxScale::from(px);
        // whole-pixel ascender line, as FreeType reports it
        let ascent = font.as_scaled(scale).ascent().round();
        Ok(Self {
            name: name.into(),
            font,
            scale,
            ascent,
        })
    }

    pub fn load_file(path: &Path, size: f32) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes(name, bytes, size)
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.font.glyph_id(ch) != GlyphId(0)
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }

    fn glyph_id(&self, ch: char) -> Result<GlyphId> {
        let id = self.font.glyph_id(ch);
        if id == GlyphId(0) {
            return Err(FontError::UnknownChar(ch));
        }
        Ok(id)
    }

    /// Ink bounds with the pen at the origin and the baseline one ascent down.
    pub fn measure(&self, ch: char) -> Result<BoundingBox> {
        let glyph = self
            .glyph_id(ch)?
            .with_scale_and_position(self.scale, point(0.0, self.ascent));
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return Ok(BoundingBox::default());
        };
        let bounds = outlined.px_bounds();
        Ok(BoundingBox::new(
            bounds.min.x as i32,
            bounds.min.y as i32,
            bounds.max.x as i32,
            bounds.max.y as i32,
        ))
    }

    pub fn render<T: GlyphTarget>(&self, target: &mut T, x: i32, y: i32, ch: char) -> Result<()> {
        let glyph = self
            .glyph_id(ch)?
            .with_scale_and_position(self.scale, point(x as f32, y as f32 + self.ascent));
        if let Some(outlined) = self.font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                target.plot(ox + gx as i32, oy + gy as i32, coverage);
            });
        }
        Ok(())
    }
}
