//! CLI binary: folder of images → one multi-page PDF.
//!
//! A thin shim over the library crate that maps two positional paths to
//! [`img2doc::convert_to_pdf`] and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use img2doc::{convert_to_pdf, ConversionConfig};
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
  # Every image in ./scans becomes one page of scans.pdf
  img2pdf ./scans scans.pdf

  # Parent directories of the output are created as needed
  img2pdf ./receipts out/2026/receipts.pdf

RECOGNIZED EXTENSIONS (case-insensitive):
  .jpg .jpeg .png .bmp .tif .tiff

Pages appear in the lexicographic order of the source file names, each page
sized exactly to its image at 150 DPI, pixels normalized to RGB. Files that
fail to decode are skipped with a warning; the run fails only when no image
could be decoded at all.
"#;

/// Merge every image of a folder into one multi-page PDF.
#[derive(Parser, Debug)]
#[command(
    name = "img2pdf",
    version,
    about = "Merge every image of a folder into one multi-page PDF",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the source images.
    input_dir: PathBuf,

    /// Path of the .pdf file to write.
    output: PathBuf,

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
    let report = convert_to_pdf(&cli.input_dir, &cli.output, &config)
        .context("conversion failed")?;

    if !cli.quiet {
        let tick = if report.stats.skipped == 0 {
            green("✔")
        } else {
            cyan("⚠")
        };
        eprintln!(
            "{tick} {}/{} images  {}ms  →  {}",
            report.stats.converted,
            report.stats.discovered,
            report.stats.total_duration_ms,
            bold(&cli.output.display().to_string()),
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
