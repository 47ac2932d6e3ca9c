//! Conversion entry points: one function per output variant.
//!
//! All three share the same first two stages — scan the input directory,
//! decode candidates one by one — and differ only in how pages leave the
//! process:
//!
//! * [`convert_to_docx`] streams pages into an accumulating Word document,
//!   saved once at the end.
//! * [`convert_to_pdf`] decodes everything eagerly, then saves one
//!   multi-page PDF in a single operation.
//! * [`convert_to_pdf_set`] writes one single-page PDF per image as it is
//!   processed.
//!
//! A file that fails to decode is logged, recorded on the output, and
//! skipped; it never aborts the run.

use crate::config::ConversionConfig;
use crate::error::Img2DocError;
use crate::output::{ConversionOutput, ConversionStats, SkippedImage};
use crate::pipeline::{decode, docx, pdf, scan};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Convert a folder of images into one Word document, one image per page.
///
/// # Errors
/// Fatal only: missing/invalid input directory, zero candidates, output
/// write failure. Per-file decode failures are recorded in the returned
/// [`ConversionOutput::skipped`] list.
pub fn convert_to_docx(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2DocError> {
    let start = Instant::now();
    let input_dir = input_dir.as_ref();
    let output_path = output_path.as_ref();
    info!(
        "converting {} → {}",
        input_dir.display(),
        output_path.display()
    );

    // ── Step 1: Scan ─────────────────────────────────────────────────────
    let candidates = scan_candidates(input_dir)?;

    // ── Step 2: Decode and append, one page at a time ────────────────────
    let mut emitter = docx::DocxEmitter::new(config);
    let mut skipped = Vec::new();
    for path in &candidates {
        match decode::decode_image(path) {
            Ok(image) => emitter.add_page(&image)?,
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                skipped.push(SkippedImage {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    // ── Step 3: Save exactly once ────────────────────────────────────────
    let pages = emitter.page_count();
    emitter.save(output_path)?;
    info!("wrote {} ({} pages)", output_path.display(), pages);

    Ok(finish(
        vec![output_path.to_path_buf()],
        candidates.len(),
        pages,
        skipped,
        start,
    ))
}

/// Convert a folder of images into one multi-page PDF.
///
/// # Errors
/// In addition to the fatal conditions shared with [`convert_to_docx`],
/// fails with [`Img2DocError::NoDecodableImages`] when every candidate
/// fails to decode — a zero-page PDF is never written.
pub fn convert_to_pdf(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2DocError> {
    let start = Instant::now();
    let input_dir = input_dir.as_ref();
    let output_path = output_path.as_ref();
    info!(
        "converting {} → {}",
        input_dir.display(),
        output_path.display()
    );

    // ── Step 1: Scan ─────────────────────────────────────────────────────
    let candidates = scan_candidates(input_dir)?;

    // ── Step 2: Decode eagerly ───────────────────────────────────────────
    // All surviving images stay in memory until the single save below.
    let mut images = Vec::new();
    let mut skipped = Vec::new();
    for path in &candidates {
        match decode::decode_image(path) {
            Ok(image) => images.push(image),
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                skipped.push(SkippedImage {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    if images.is_empty() {
        return Err(Img2DocError::NoDecodableImages {
            dir: input_dir.to_path_buf(),
            attempted: candidates.len(),
        });
    }

    // ── Step 3: Build all pages, save exactly once ───────────────────────
    let title = output_title(output_path);
    let mut builder = pdf::PdfBuilder::new(&title, config.dpi);
    for image in &images {
        builder.push_page(&image.image);
    }
    let pages = builder.page_count();
    pdf::write_pdf(output_path, &builder.into_bytes())?;
    info!("wrote {} ({} pages)", output_path.display(), pages);

    Ok(finish(
        vec![output_path.to_path_buf()],
        candidates.len(),
        pages,
        skipped,
        start,
    ))
}

/// Convert a folder of images into individual single-page PDFs, one per
/// image, named `<stem>.pdf` inside `output_dir`.
///
/// Distinct source files sharing a stem (e.g. `a.png` and `a.jpg`) collide
/// on the output name; the later file in scan order wins.
///
/// # Errors
/// Fatal only: missing/invalid input directory, zero candidates, output
/// write failure. A run where every candidate fails to decode completes
/// with zero outputs.
pub fn convert_to_pdf_set(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2DocError> {
    let start = Instant::now();
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();
    info!(
        "converting {} → {}{}",
        input_dir.display(),
        output_dir.display(),
        std::path::MAIN_SEPARATOR
    );

    // ── Step 1: Create the output directory up front ─────────────────────
    std::fs::create_dir_all(output_dir).map_err(|e| Img2DocError::OutputWriteFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    // ── Step 2: Scan ─────────────────────────────────────────────────────
    let candidates = scan_candidates(input_dir)?;

    // ── Step 3: Decode and write, one file at a time ─────────────────────
    let mut outputs = Vec::new();
    let mut skipped = Vec::new();
    for path in &candidates {
        let image = match decode::decode_image(path) {
            Ok(image) => image,
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                skipped.push(SkippedImage {
                    path: path.clone(),
                    error,
                });
                continue;
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_path = output_dir.join(format!("{stem}.pdf"));
        let bytes = pdf::single_page_pdf(&stem, &image.image, config.dpi);
        pdf::write_pdf(&out_path, &bytes)?;
        info!("wrote {}", out_path.display());
        outputs.push(out_path);
    }

    let converted = outputs.len();
    Ok(finish(outputs, candidates.len(), converted, skipped, start))
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Scan the input directory and promote an empty result to a fatal error.
fn scan_candidates(dir: &Path) -> Result<Vec<PathBuf>, Img2DocError> {
    let candidates = scan::scan_dir(dir)?;
    if candidates.is_empty() {
        return Err(Img2DocError::NoImagesFound {
            dir: dir.to_path_buf(),
            extensions: scan::recognized_extensions_display(),
        });
    }
    info!("{} candidate images in {}", candidates.len(), dir.display());
    Ok(candidates)
}

/// Derive a document title from the output file stem.
fn output_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "img2doc".to_string())
}

/// Assemble the final report.
fn finish(
    outputs: Vec<PathBuf>,
    discovered: usize,
    converted: usize,
    skipped: Vec<SkippedImage>,
    start: Instant,
) -> ConversionOutput {
    let stats = ConversionStats {
        discovered,
        converted,
        skipped: skipped.len(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "done: {}/{} images in {}ms",
        stats.converted, stats.discovered, stats.total_duration_ms
    );
    ConversionOutput {
        outputs,
        skipped,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_output_stem() {
        assert_eq!(output_title(Path::new("/tmp/album.pdf")), "album");
        assert_eq!(output_title(Path::new("scans.docx")), "scans");
    }
}
