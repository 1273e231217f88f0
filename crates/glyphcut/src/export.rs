//! Batch export of one PNG sprite per character.
use std::path::{Path, PathBuf};

use crate::{
    canvas::{Canvas, Color},
    glyph::{self, BoundingBox, Placement},
    Font, FontError, Result,
};

pub const DEFAULT_FONT: &str = "Hack-Regular.ttf";
pub const DEFAULT_OUTPUT: &str = "./output3/";
pub const DEFAULT_SIZE: f32 = 14.0;
pub const CELL_WIDTH: u32 = 9;
pub const CELL_HEIGHT: u32 = 14;

/// `!` through `~` in code order.
pub const PRINTABLE_ASCII: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub font_path: PathBuf,
    pub font_size: f32,
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub foreground: Color,
    pub background: Color,
    pub chars: String,
    pub antialias: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT),
            font_size: DEFAULT_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT),
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
            foreground: Color::WHITE,
            background: Color::BLACK,
            chars: PRINTABLE_ASCII.to_string(),
            antialias: true,
        }
    }
}

/// A character that made it to disk.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRecord {
    pub ch: char,
    pub bbox: BoundingBox,
    pub placement: Placement,
    pub path: PathBuf,
}

impl GlyphRecord {
    pub fn code(&self) -> u32 {
        self.ch as u32
    }

    pub fn width(&self) -> i32 {
        self.bbox.width()
    }

    pub fn height(&self) -> i32 {
        self.bbox.height()
    }

    pub fn centered(&self) -> bool {
        self.placement.alignment.is_centered()
    }
}

#[derive(Debug)]
pub struct GlyphFailure {
    pub ch: char,
    pub error: FontError,
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub records: Vec<GlyphRecord>,
    pub failures: Vec<GlyphFailure>,
}

impl ExportSummary {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Observer notified as each character finishes.
pub trait ExportProgress {
    fn exported(&mut self, record: &GlyphRecord);
    fn failed(&mut self, failure: &GlyphFailure);
}

impl ExportProgress for () {
    fn exported(&mut self, _record: &GlyphRecord) {}
    fn failed(&mut self, _failure: &GlyphFailure) {}
}

pub fn file_name(ch: char) -> String {
    format!("{}.png", ch as u32)
}

pub struct Exporter {
    font: Font,
    options: ExportOptions,
}

impl Exporter {
    pub fn new(font: Font, options: ExportOptions) -> Self {
        Self { font, options }
    }

    /// Open the configured font file, or the built-in font if that fails.
    pub fn open(options: ExportOptions) -> Self {
        let (font, _) = Font::open_or_builtin(&options.font_path, options.font_size);
        Self::new(font, options)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn output_path(&self, ch: char) -> PathBuf {
        self.options.output_dir.join(file_name(ch))
    }

    /// Rasterize a single character into a fresh canvas without saving it.
    pub fn rasterize(&self, ch: char) -> Result<(Canvas, BoundingBox, Placement)> {
        let bbox = self.font.measure(ch)?;
        let opts = &self.options;
        let mut canvas = Canvas::new(
            opts.width,
            opts.height,
            opts.background,
            opts.foreground,
            opts.antialias,
        )?;
        let placement = glyph::place(ch, &bbox, opts.width, opts.height);
        log::debug!("{ch:?}: bbox {bbox:?} -> origin ({}, {})", placement.x, placement.y);
        self.font.render(&mut canvas, placement.x, placement.y, ch)?;
        Ok((canvas, bbox, placement))
    }

    /// Rasterize and write `<code>.png`. A failed write leaves no file behind.
    pub fn export_glyph(&self, ch: char) -> Result<GlyphRecord> {
        let (canvas, bbox, placement) = self.rasterize(ch)?;
        let path = self.output_path(ch);
        if let Err(err) = canvas.save_png(&path) {
            let _ = std::fs::remove_file(&path);
            return Err(err);
        }
        log::debug!("wrote {}", path.display());
        Ok(GlyphRecord {
            ch,
            bbox,
            placement,
            path,
        })
    }

    /// Export every configured character in order. Only failing to create
    /// the output directory aborts; per-character errors are collected.
    pub fn run<P: ExportProgress>(&self, progress: &mut P) -> Result<ExportSummary> {
        create_output_dir(&self.options.output_dir)?;
        let mut summary = ExportSummary::default();
        for ch in self.options.chars.chars() {
            match self.export_glyph(ch) {
                Ok(record) => {
                    progress.exported(&record);
                    summary.records.push(record);
                }
                Err(error) => {
                    let failure = GlyphFailure { ch, error };
                    progress.failed(&failure);
                    summary.failures.push(failure);
                }
            }
        }
        Ok(summary)
    }
}

fn create_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
