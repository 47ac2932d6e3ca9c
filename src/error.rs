//! Error types for the img2doc library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Img2DocError`] — **Fatal**: the conversion cannot proceed at all
//!   (missing input directory, zero candidates, unwritable output).
//!   Returned as `Err(Img2DocError)` from the top-level `convert_*`
//!   functions.
//!
//! * [`ImageError`] — **Non-fatal**: a single source file failed to read or
//!   decode but all other files are fine. Stored inside
//!   [`crate::output::SkippedImage`] so callers can inspect partial success
//!   rather than losing the whole run to one bad file.
//!
//! The separation lets callers decide their own tolerance: treat any skip as
//! an error via [`crate::output::ConversionOutput::into_strict`], or log and
//! move on.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the img2doc library.
///
/// Per-file failures use [`ImageError`] and are stored in
/// [`crate::output::SkippedImage`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Img2DocError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input directory was not found at the given path.
    #[error("input directory not found: '{path}'\nCheck the path exists and is readable.")]
    InputDirNotFound { path: PathBuf },

    /// The input path exists but is not a directory.
    #[error("input path is not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    /// The scan produced zero candidate files.
    #[error("no images found in '{dir}'\nRecognized extensions: {extensions}")]
    NoImagesFound { dir: PathBuf, extensions: String },

    /// Every candidate failed to decode; a multi-page document would be empty.
    #[error("none of the {attempted} candidate images in '{dir}' could be decoded")]
    NoDecodableImages { dir: PathBuf, attempted: usize },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write an output file or directory.
    #[error("failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document container rejected the accumulated content.
    #[error("failed to build document '{path}': {detail}")]
    DocumentBuildFailed { path: PathBuf, detail: String },

    /// Some images converted but at least one was skipped.
    ///
    /// Returned by [`crate::output::ConversionOutput::into_strict`] when the
    /// caller wants to treat any skipped file as an error.
    #[error("{skipped}/{total} images were skipped during conversion")]
    PartialFailure {
        converted: usize,
        skipped: usize,
        total: usize,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single source image.
///
/// Stored alongside the path in [`crate::output::SkippedImage`]. The overall
/// run continues; only the single-PDF emitter fails when ALL images are
/// skipped.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum ImageError {
    /// The file could not be read from disk.
    #[error("'{path}': read failed: {detail}")]
    ReadFailed { path: PathBuf, detail: String },

    /// The bytes could not be decoded as a supported image.
    #[error("'{path}': decode failed: {detail}")]
    DecodeFailed { path: PathBuf, detail: String },
}

impl ImageError {
    /// The path of the file this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ImageError::ReadFailed { path, .. } => path,
            ImageError::DecodeFailed { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_display() {
        let e = Img2DocError::PartialFailure {
            converted: 9,
            skipped: 1,
            total: 10,
        };
        let msg = e.to_string();
        assert!(msg.contains("1/10"), "got: {msg}");
    }

    #[test]
    fn no_images_found_lists_extensions() {
        let e = Img2DocError::NoImagesFound {
            dir: PathBuf::from("/tmp/photos"),
            extensions: ".jpg .jpeg .png .bmp .tif .tiff".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/photos"));
        assert!(msg.contains(".tiff"));
    }

    #[test]
    fn image_error_carries_path() {
        let e = ImageError::DecodeFailed {
            path: PathBuf::from("broken.png"),
            detail: "unexpected EOF".into(),
        };
        assert_eq!(e.path(), &PathBuf::from("broken.png"));
        assert!(e.to_string().contains("unexpected EOF"));
    }
}
