//! Pre-rasterized fallback font used when no font file can be loaded.
use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight, RasterizedChar};

use crate::{canvas::GlyphTarget, glyph::BoundingBox, FontError, Result};

pub const STYLE: FontWeight = FontWeight::Regular;
pub const SIZE: RasterHeight = RasterHeight::Size16;

pub const HEIGHT: usize = SIZE.val();
pub const WIDTH: usize = get_raster_width(STYLE, SIZE);

/// Noto Sans Mono at a fixed raster height. The top-left of the raster
/// cell is the text origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    pub const NAME: &'static str = "Noto Sans Mono (built-in)";

    pub fn has_char(&self, ch: char) -> bool {
        get_raster(ch, STYLE, SIZE).is_some()
    }

    fn raster(&self, ch: char) -> Result<RasterizedChar> {
        get_raster(ch, STYLE, SIZE).ok_or(FontError::UnknownChar(ch))
    }

    /// Bounds of the non-zero intensity pixels in the raster cell.
    pub fn measure(&self, ch: char) -> Result<BoundingBox> {
        let raster = self.raster(ch)?;
        let mut bbox: Option<BoundingBox> = None;
        for (y, row) in raster.raster().iter().enumerate() {
            for (x, &intensity) in row.iter().enumerate() {
                if intensity == 0 {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                let b = bbox.get_or_insert(BoundingBox::new(x, y, x + 1, y + 1));
                b.left = b.left.min(x);
                b.top = b.top.min(y);
                b.right = b.right.max(x + 1);
                b.bottom = b.bottom.max(y + 1);
            }
        }
        Ok(bbox.unwrap_or_default())
    }

    pub fn render<T: GlyphTarget>(&self, target: &mut T, x: i32, y: i32, ch: char) -> Result<()> {
        let raster = self.raster(ch)?;
        for (ry, row) in raster.raster().iter().enumerate() {
            for (rx, &intensity) in row.iter().enumerate() {
                if intensity > 0 {
                    target.plot(x + rx as i32, y + ry as i32, intensity as f32 / 255.0);
                }
            }
        }
        Ok(())
    }
}
