use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use glyphcut::{ExportOptions, Exporter};

use crate::console::ConsoleReport;
mod console;

// every export parameter is fixed, see `ExportOptions::default()`
#[derive(Parser)]
#[command(
    name = "glyphcut",
    version,
    about = "Export Hack-Regular.ttf glyphs as 9x14 PNG sprites into ./output3/, one file per character"
)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let exporter = Exporter::open(ExportOptions::default());
    log::info!("using font: {}", exporter.font().name());

    let mut report = ConsoleReport;
    report.header(exporter.options());
    let summary = exporter.run(&mut report)?;
    report.footer(exporter.options(), &summary);
    Ok(())
}
