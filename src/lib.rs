//! # img2doc
//!
//! Batch-convert a folder of raster images into document formats: a Word
//! document with one image per page, a single multi-page PDF, or one
//! single-page PDF per image.
//!
//! ## Pipeline Overview
//!
//! ```text
//! folder of images
//!  │
//!  ├─ 1. Scan    list the directory, filter by extension, sort by name
//!  ├─ 2. Decode  open each file via the image crate; skip-and-warn on failure
//!  └─ 3. Emit    docx (page per image) | one multi-page PDF | PDF per image
//! ```
//!
//! Recognized extensions (case-insensitive): `.jpg .jpeg .png .bmp .tif
//! .tiff`. Output order is always the lexicographic order of the source
//! file names. Execution is single-threaded and strictly sequential; a
//! corrupt file costs one warning and zero pages, nothing more.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2doc::{convert_to_pdf, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let report = convert_to_pdf("./scans", "./out/scans.pdf", &config)?;
//!     eprintln!(
//!         "{} pages written, {} files skipped",
//!         report.stats.converted, report.stats.skipped
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `img2docx`, `img2pdf`, and `img2pdfs` binaries (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! img2doc = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert_to_docx, convert_to_pdf, convert_to_pdf_set};
pub use error::{ImageError, Img2DocError};
pub use output::{ConversionOutput, ConversionStats, SkippedImage};
pub use pipeline::scan::RECOGNIZED_EXTENSIONS;
