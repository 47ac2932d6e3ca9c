//! Directory scanning: find the image files a run will process.
//!
//! The scan is deliberately shallow — one directory, no recursion — and its
//! output order is the contract the emitters build on: pages and output
//! files appear in exactly the order returned here. `read_dir` order is
//! platform-dependent, so the listing is sorted explicitly by file name.

use crate::error::Img2DocError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions recognized as source images, lower-case, without dots.
pub const RECOGNIZED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

/// The recognized set formatted for error messages: `.jpg .jpeg ...`.
pub fn recognized_extensions_display() -> String {
    RECOGNIZED_EXTENSIONS
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// List the candidate image files in `dir`, sorted by file name.
///
/// A candidate is a regular file whose extension, lower-cased, is in
/// [`RECOGNIZED_EXTENSIONS`]. Subdirectories are not entered. The returned
/// list may be empty; deciding whether that is fatal is the caller's job.
///
/// # Errors
/// [`Img2DocError::InputDirNotFound`] when `dir` does not exist,
/// [`Img2DocError::NotADirectory`] when it exists but is not a directory.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, Img2DocError> {
    if !dir.exists() {
        return Err(Img2DocError::InputDirNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(Img2DocError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|_| Img2DocError::InputDirNotFound {
        path: dir.to_path_buf(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_candidate(p))
        .collect();

    // Deterministic output order: lexicographic by file name.
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("scanned {}: {} candidates", dir.display(), files.len());
    Ok(files)
}

/// Check whether a path has a recognized image extension (case-insensitive).
fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            RECOGNIZED_EXTENSIONS.iter().any(|e| *e == ext_lower)
        })
        .unwrap_or(false)
}
