//! Run reports: what was written, what was skipped, how long it took.
//!
//! Every `convert_*` entry point returns a [`ConversionOutput`] even when
//! some source files were skipped. Callers that want all-or-nothing
//! semantics upgrade skips to a fatal error with
//! [`ConversionOutput::into_strict`].

use crate::error::{ImageError, Img2DocError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A source file that was filtered in by the scanner but failed to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedImage {
    /// Path of the source file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: ImageError,
}

/// Aggregate counters for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Candidate files the scanner produced.
    pub discovered: usize,
    /// Images that made it into an output document.
    pub converted: usize,
    /// Candidates that failed to read or decode.
    pub skipped: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub total_duration_ms: u64,
}

/// The result of a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Paths of the files written, in the order they were written.
    ///
    /// One element for the Word and single-PDF emitters; one element per
    /// surviving image for the individual-PDF emitter.
    pub outputs: Vec<PathBuf>,
    /// Source files that were skipped, in scan order.
    pub skipped: Vec<SkippedImage>,
    /// Run counters.
    pub stats: ConversionStats,
}

impl ConversionOutput {
    /// Treat any skipped file as a fatal [`Img2DocError::PartialFailure`].
    ///
    /// Returns `self` unchanged when nothing was skipped.
    pub fn into_strict(self) -> Result<Self, Img2DocError> {
        if self.skipped.is_empty() {
            Ok(self)
        } else {
            Err(Img2DocError::PartialFailure {
                converted: self.stats.converted,
                skipped: self.stats.skipped,
                total: self.stats.discovered,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_with_skips(skipped: usize) -> ConversionOutput {
        ConversionOutput {
            outputs: vec![PathBuf::from("out.pdf")],
            skipped: (0..skipped)
                .map(|i| SkippedImage {
                    path: PathBuf::from(format!("bad{i}.png")),
                    error: ImageError::DecodeFailed {
                        path: PathBuf::from(format!("bad{i}.png")),
                        detail: "truncated".into(),
                    },
                })
                .collect(),
            stats: ConversionStats {
                discovered: 3,
                converted: 3 - skipped,
                skipped,
                total_duration_ms: 12,
            },
        }
    }

    #[test]
    fn strict_passes_through_clean_runs() {
        let out = output_with_skips(0);
        assert!(out.into_strict().is_ok());
    }

    #[test]
    fn strict_rejects_runs_with_skips() {
        let out = output_with_skips(2);
        match out.into_strict() {
            Err(Img2DocError::PartialFailure {
                converted,
                skipped,
                total,
            }) => {
                assert_eq!(converted, 1);
                assert_eq!(skipped, 2);
                assert_eq!(total, 3);
            }
            other => panic!("expected PartialFailure, got {other:?}"),
        }
    }
}
