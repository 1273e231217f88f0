//! Print glyph sprites as text, the way they would be written to disk.
//!
//! cargo run --example preview -- [FONT] [CHARS]

use glyphcut::{ExportOptions, Exporter};
use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut options = ExportOptions::default();
    if let Some(font) = args.next() {
        options.font_path = PathBuf::from(font);
    }
    let chars = args.next().unwrap_or_else(|| "Hg_.,\"^".to_string());

    let exporter = Exporter::open(options);
    println!("font: {}", exporter.font().name());
    for ch in chars.chars() {
        match exporter.rasterize(ch) {
            Ok((canvas, bbox, placement)) => {
                println!(
                    "{ch:?} bbox=({}, {}, {}, {}) origin=({}, {}) {:?}",
                    bbox.left, bbox.top, bbox.right, bbox.bottom, placement.x, placement.y,
                    placement.alignment
                );
                for y in 0..canvas.height() {
                    let row: String = (0..canvas.width())
                        .map(|x| match canvas.pixel(x, y).r {
                            0..=63 => '.',
                            64..=191 => '+',
                            _ => '#',
                        })
                        .collect();
                    println!("  {row}");
                }
            }
            Err(e) => println!("{ch:?}: {e}"),
        }
    }
}
