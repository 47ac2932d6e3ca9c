//! CLI binary: folder of images → one single-page PDF per image.
//!
//! A thin shim over the library crate that maps two positional paths to
//! [`img2doc::convert_to_pdf_set`] and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use img2doc::{convert_to_pdf_set, ConversionConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # scan01.png, scan02.jpg → out/scan01.pdf, out/scan02.pdf
  img2pdfs ./scans ./out

RECOGNIZED EXTENSIONS (case-insensitive):
  .jpg .jpeg .png .bmp .tif .tiff

Each output is named after the source file's stem with a .pdf extension;
two sources sharing a stem (a.png, a.jpg) collide and the later one wins.
The output directory is created up front. Files that fail to decode are
skipped with a warning; the run continues.
"#;

/// Convert every image of a folder into its own single-page PDF.
#[derive(Parser, Debug)]
#[command(
    name = "img2pdfs",
    version,
    about = "Convert every image of a folder into its own single-page PDF",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the source images.
    input_dir: PathBuf,

    /// Directory the PDFs are written into (created if absent).
    output_dir: PathBuf,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "IMG2DOC_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = ConversionConfig::default();
    let report = convert_to_pdf_set(&cli.input_dir, &cli.output_dir, &config)
        .context("conversion failed")?;

    if !cli.quiet {
        let tick = if report.stats.skipped == 0 {
            green("✔")
        } else {
            cyan("⚠")
        };
        eprintln!(
            "{tick} {}/{} images  {}ms  →  {}{}",
            report.stats.converted,
            report.stats.discovered,
            report.stats.total_duration_ms,
            bold(&cli.output_dir.display().to_string()),
            std::path::MAIN_SEPARATOR,
        );
        if report.stats.skipped > 0 {
            eprintln!("   {}", dim(&format!("{} skipped", report.stats.skipped)));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}
