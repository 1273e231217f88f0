use glyphcut::{ExportOptions, ExportProgress, ExportSummary, GlyphFailure, GlyphRecord, NO_CENTER_CHARS};

const RULE_WIDTH: usize = 55;

/// Prints the extraction table to stdout as characters are exported.
pub struct ConsoleReport;

impl ConsoleReport {
    pub fn header(&self, options: &ExportOptions) {
        println!("Extracting {} characters...", options.chars.chars().count());
        println!(
            "All images will be {}x{} pixels",
            options.width, options.height
        );
        println!("Character | ASCII | Char Width | Char Height | Centered");
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    pub fn footer(&self, options: &ExportOptions, summary: &ExportSummary) {
        println!(
            "\nExtraction complete! Files saved to: {}",
            options.output_dir.display()
        );
        println!(
            "Successfully extracted {} character images.",
            summary.records.len()
        );
        if !summary.failures.is_empty() {
            println!(
                "Failed to extract {} character(s).",
                summary.failures.len()
            );
        }
        println!(
            "All images are {}x{} pixels.",
            options.width, options.height
        );
        println!("Characters {} were NOT centered.", no_center_set());
    }
}

impl ExportProgress for ConsoleReport {
    fn exported(&mut self, record: &GlyphRecord) {
        println!("{}", format_row(record));
    }

    fn failed(&mut self, failure: &GlyphFailure) {
        println!("{}", format_failure(failure));
    }
}

pub fn format_failure(failure: &GlyphFailure) -> String {
    format!("[-] Couldn't save character '{}': {}", failure.ch, failure.error)
}

pub fn format_row(record: &GlyphRecord) -> String {
    let centered = if record.centered() { "Yes" } else { "No" };
    format!(
        "    {}     | {:3}  |     {:2}     |     {:2}      |   {centered}",
        record.ch,
        record.code(),
        record.width(),
        record.height(),
    )
}

fn no_center_set() -> String {
    let items: Vec<String> = NO_CENTER_CHARS.iter().map(|c| format!("'{c}'")).collect();
    format!("{{{}}}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcut::{Alignment, BoundingBox, FontError, Placement};
    use std::path::PathBuf;

    fn record(ch: char, bbox: BoundingBox, alignment: Alignment) -> GlyphRecord {
        GlyphRecord {
            ch,
            bbox,
            placement: Placement { x: 0, y: 0, alignment },
            path: PathBuf::from(format!("{}.png", ch as u32)),
        }
    }

    #[test]
    fn row_layout() {
        let r = record('A', BoundingBox::new(0, 3, 8, 13), Alignment::Centered);
        assert_eq!(
            format_row(&r),
            "    A     |  65  |      8     |     10      |   Yes"
        );
        let r = record('_', BoundingBox::new(0, 14, 8, 15), Alignment::Biased);
        assert_eq!(
            format_row(&r),
            "    _     |  95  |      8     |      1      |   No"
        );
    }

    #[test]
    fn failure_line() {
        let failure = GlyphFailure {
            ch: '\u{2603}',
            error: FontError::UnknownChar('\u{2603}'),
        };
        assert_eq!(
            format_failure(&failure),
            "[-] Couldn't save character '\u{2603}': unknown character: '\u{2603}'"
        );
    }

    #[test]
    fn no_center_listing() {
        assert_eq!(no_center_set(), "{'\"', '.', '_', '^', ','}");
    }
}
