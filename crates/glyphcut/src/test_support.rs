//! Test support utilities for glyphcut.
//!
//! Helper types that are useful when testing glyph rasterization and export,
//! but are not part of the public API.

use crate::{
    canvas::GlyphTarget,
    export::{ExportProgress, GlyphFailure, GlyphRecord},
    glyph::BoundingBox,
};

/// A coverage buffer target.
///
/// Captures plotted coverage into a grid that can be inspected.
pub struct CoverageTarget {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<f32>,
}

impl CoverageTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }

    /// Bounds of every pixel with non-zero coverage.
    pub fn ink_bounds(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) <= 0.0 {
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
        bbox
    }
}

impl GlyphTarget for CoverageTarget {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.coverage[idx] = self.coverage[idx].max(coverage);
    }
}

/// Progress observer that remembers what it was told.
#[derive(Default)]
pub struct RecordingProgress {
    pub exported: Vec<char>,
    pub failed: Vec<(char, String)>,
}

impl ExportProgress for RecordingProgress {
    fn exported(&mut self, record: &GlyphRecord) {
        self.exported.push(record.ch);
    }

    fn failed(&mut self, failure: &GlyphFailure) {
        self.failed.push((failure.ch, failure.error.to_string()));
    }
}
