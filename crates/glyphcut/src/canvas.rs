use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::{FontError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FontError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| FontError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    fn mix(self, other: Color, t: f32) -> Color {
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

/// Something a font backend can rasterize into.
pub trait GlyphTarget {
    fn size(&self) -> (u32, u32);

    /// Deposit ink with the given coverage (0.0..=1.0) at a pixel.
    /// Coordinates outside the target are ignored.
    fn plot(&mut self, x: i32, y: i32, coverage: f32);
}

/// Fixed-size RGB raster a single glyph is drawn into.
pub struct Canvas {
    image: RgbImage,
    background: Color,
    foreground: Color,
    antialias: bool,
}

impl Canvas {
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        foreground: Color,
        antialias: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FontError::InvalidCanvas { width, height });
        }
        Ok(Self {
            image: RgbImage::from_pixel(width, height, background.into()),
            background,
            foreground,
            antialias,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *self.image.get_pixel(x, y);
        Color::new(r, g, b)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl GlyphTarget for Canvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let color = if self.antialias {
            // overlapping contours may plot the same pixel twice; keep the max
            let current = self.pixel(x as u32, y as u32);
            let mixed = self.background.mix(self.foreground, coverage);
            if distance(current, self.background) >= distance(mixed, self.background) {
                return;
            }
            mixed
        } else if coverage >= 0.5 {
            self.foreground
        } else {
            return;
        };
        self.image.put_pixel(x as u32, y as u32, color.into());
    }
}

fn distance(a: Color, b: Color) -> u32 {
    a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(Color::parse("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#1a2B3c").unwrap(), Color::new(0x1A, 0x2B, 0x3C));
        assert!(Color::parse("#FFF").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
        assert!(Color::parse("#+F+F+F").is_err());
        assert!(Color::parse("+FFFFF").is_err());
        assert!(Color::parse("#ÿÿÿ").is_err());
        assert_eq!(Color::new(1, 2, 255).to_string(), "#0102FF");
    }

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(9, 14, Color::BLACK, Color::WHITE, true).unwrap();
        assert_eq!(canvas.size(), (9, 14));
        assert!(canvas.image().pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn zero_sized_canvas_rejected() {
        assert!(matches!(
            Canvas::new(0, 14, Color::BLACK, Color::WHITE, true),
            Err(FontError::InvalidCanvas { width: 0, height: 14 })
        ));
    }

    #[test]
    fn plot_clips_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2, Color::BLACK, Color::WHITE, true).unwrap();
        canvas.plot(-1, 0, 1.0);
        canvas.plot(0, 2, 1.0);
        canvas.plot(2, 0, 1.0);
        assert!(canvas.image().pixels().all(|p| *p == Rgb([0, 0, 0])));
        canvas.plot(1, 1, 1.0);
        assert_eq!(canvas.pixel(1, 1), Color::WHITE);
    }

    #[test]
    fn antialias_blends_and_keeps_max() {
        let mut canvas = Canvas::new(1, 1, Color::BLACK, Color::WHITE, true).unwrap();
        canvas.plot(0, 0, 0.5);
        assert_eq!(canvas.pixel(0, 0), Color::new(128, 128, 128));
        canvas.plot(0, 0, 0.25);
        assert_eq!(canvas.pixel(0, 0), Color::new(128, 128, 128));
    }

    #[test]
    fn threshold_without_antialias() {
        let mut canvas = Canvas::new(2, 1, Color::BLACK, Color::WHITE, false).unwrap();
        canvas.plot(0, 0, 0.49);
        canvas.plot(1, 0, 0.5);
        assert_eq!(canvas.pixel(0, 0), Color::BLACK);
        assert_eq!(canvas.pixel(1, 0), Color::WHITE);
    }
}
