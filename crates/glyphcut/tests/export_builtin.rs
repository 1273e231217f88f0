//! Batch export using the built-in fallback font.

use glyphcut::{
    export::PRINTABLE_ASCII, glyph, test_support::RecordingProgress, Alignment, ExportOptions,
    Exporter, Font, FontError, NO_CENTER_CHARS,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("Failed to clean up scratch dir");
    }
    dir
}

fn options(dir: &str) -> ExportOptions {
    ExportOptions {
        output_dir: scratch_dir(dir),
        ..ExportOptions::default()
    }
}

#[test]
fn exports_every_printable_char() {
    let opts = options("export_all");
    let exporter = Exporter::new(Font::builtin(), opts.clone());
    let mut progress = RecordingProgress::default();
    let summary = exporter.run(&mut progress).unwrap();

    assert_eq!(summary.records.len(), 94);
    assert!(summary.failures.is_empty());
    assert_eq!(progress.exported, PRINTABLE_ASCII.chars().collect::<Vec<_>>());

    for ch in PRINTABLE_ASCII.chars() {
        let path = opts.output_dir.join(format!("{}.png", ch as u32));
        let img = image::open(&path)
            .unwrap_or_else(|e| panic!("{} unreadable: {e}", path.display()))
            .to_rgb8();
        assert_eq!(img.dimensions(), (9, 14), "size of {ch:?}");
    }
    assert_eq!(fs::read_dir(&opts.output_dir).unwrap().count(), 94);
}

#[test]
fn two_colors_without_antialias() {
    let opts = ExportOptions {
        antialias: false,
        chars: "@#gW_".to_string(),
        ..options("export_two_color")
    };
    let exporter = Exporter::new(Font::builtin(), opts.clone());
    let summary = exporter.run(&mut ()).unwrap();
    assert_eq!(summary.records.len(), 5);

    for record in &summary.records {
        let img = image::open(&record.path).unwrap().to_rgb8();
        let mut saw_white = false;
        for p in img.pixels() {
            match p.0 {
                [0, 0, 0] => {}
                [255, 255, 255] => saw_white = true,
                other => panic!("unexpected color {other:?} in {:?}", record.ch),
            }
        }
        assert!(saw_white, "{:?} rendered nothing", record.ch);
    }
}

#[test]
fn placement_follows_measured_box() {
    let opts = options("export_placement");
    let exporter = Exporter::new(Font::builtin(), opts);
    let summary = exporter.run(&mut ()).unwrap();

    for record in &summary.records {
        let bbox = exporter.font().measure(record.ch).unwrap();
        assert_eq!(record.bbox, bbox);
        let (w, h) = (bbox.width(), bbox.height());
        let p = record.placement;
        assert_eq!(p.x, (9 - w).div_euclid(2) - bbox.left, "x of {:?}", record.ch);
        let expected_y = match record.ch {
            '_' => 14 - 5 - bbox.top,
            ',' => 14 - 6 - bbox.top,
            '.' | '"' => 1 - bbox.top,
            '^' => -bbox.top,
            _ => (14 - h).div_euclid(2) - bbox.top,
        };
        assert_eq!(p.y, expected_y, "y of {:?}", record.ch);
        assert_eq!(
            record.centered(),
            !NO_CENTER_CHARS.contains(&record.ch),
            "alignment of {:?}",
            record.ch
        );
    }
}

#[test]
fn rendered_ink_lands_where_placed() {
    let exporter = Exporter::new(Font::builtin(), ExportOptions::default());
    let (canvas, bbox, placement) = exporter.rasterize('H').unwrap();
    assert_eq!(placement.alignment, Alignment::Centered);
    assert_eq!(placement, glyph::place('H', &bbox, 9, 14));

    // centered ink starts at the computed column
    let left = (9 - bbox.width()).div_euclid(2) as u32;
    let top = (14 - bbox.height()).div_euclid(2) as u32;
    let inked = |x: u32| (0..14).any(|y| canvas.pixel(x, y) != glyphcut::Color::BLACK);
    let first_col = (0..9).find(|&x| inked(x)).unwrap();
    assert_eq!(first_col, left);
    let first_row = (0..14)
        .find(|&y| (0..9).any(|x| canvas.pixel(x, y) != glyphcut::Color::BLACK))
        .unwrap();
    assert_eq!(first_row, top);
}

#[test]
fn failing_char_does_not_stop_batch() {
    let opts = ExportOptions {
        chars: "AB\u{2603}C".to_string(),
        ..options("export_failure")
    };
    let exporter = Exporter::new(Font::builtin(), opts.clone());
    let mut progress = RecordingProgress::default();
    let summary = exporter.run(&mut progress).unwrap();

    assert_eq!(progress.exported, vec!['A', 'B', 'C']);
    assert_eq!(progress.failed.len(), 1);
    assert_eq!(progress.failed[0].0, '\u{2603}');
    assert!(matches!(
        summary.failures[0].error,
        FontError::UnknownChar('\u{2603}')
    ));
    assert_eq!(summary.attempted(), 4);

    let mut names: Vec<String> = fs::read_dir(&opts.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["65.png", "66.png", "67.png"]);
}

#[test]
fn rerun_is_byte_identical() {
    let opts = options("export_idempotent");
    let exporter = Exporter::new(Font::builtin(), opts.clone());
    exporter.run(&mut ()).unwrap();
    let first: Vec<Vec<u8>> = PRINTABLE_ASCII
        .chars()
        .map(|ch| fs::read(exporter.output_path(ch)).unwrap())
        .collect();
    exporter.run(&mut ()).unwrap();
    let second: Vec<Vec<u8>> = PRINTABLE_ASCII
        .chars()
        .map(|ch| fs::read(exporter.output_path(ch)).unwrap())
        .collect();
    assert!(first == second, "second run changed output");
}

#[test]
fn missing_font_falls_back() {
    let opts = ExportOptions {
        font_path: PathBuf::from("definitely/not/here/Hack-Regular.ttf"),
        ..options("export_fallback")
    };
    let exporter = Exporter::open(opts);
    assert!(exporter.font().is_builtin());
    let summary = exporter.run(&mut ()).unwrap();
    assert_eq!(summary.records.len(), 94);
}

#[test]
fn unusable_output_dir_is_fatal() {
    let base = scratch_dir("export_blocked");
    fs::create_dir_all(&base).unwrap();
    let blocker = base.join("file");
    fs::write(&blocker, b"not a directory").unwrap();
    let opts = ExportOptions {
        output_dir: blocker.join("out"),
        ..ExportOptions::default()
    };
    let exporter = Exporter::new(Font::builtin(), opts);
    assert!(matches!(exporter.run(&mut ()), Err(FontError::Io(_))));
}
