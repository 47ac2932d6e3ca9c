//! Image decoding with content-based format detection.
//!
//! The scanner filters by extension, but the decoder trusts the bytes: a PNG
//! renamed to `.jpg` still decodes as PNG. Any failure here is the per-file,
//! non-fatal [`ImageError`] — the pipeline skips the file and continues.

use crate::error::ImageError;
use image::{DynamicImage, GenericImageView};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A successfully decoded source image.
#[derive(Debug)]
pub struct DecodedImage {
    /// Path of the source file.
    pub path: PathBuf,
    /// The decoded pixel data.
    pub image: DynamicImage,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl DecodedImage {
    /// The source file name, lossily converted for labels and log lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Read and decode one candidate file.
///
/// The format is guessed from the file content first, falling back to the
/// extension via [`image::ImageFormat::from_path`].
pub fn decode_image(path: &Path) -> Result<DecodedImage, ImageError> {
    let bytes = std::fs::read(path).map_err(|e| ImageError::ReadFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::DecodeFailed {
            path: path.to_path_buf(),
            detail: format!("cannot detect image format: {e}"),
        })?;

    let reader = if reader.format().is_some() {
        reader
    } else {
        let format =
            image::ImageFormat::from_path(path).map_err(|_| ImageError::DecodeFailed {
                path: path.to_path_buf(),
                detail: "unrecognized image format".into(),
            })?;
        let mut r = reader;
        r.set_format(format);
        r
    };

    let image = reader.decode().map_err(|e| ImageError::DecodeFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    Ok(DecodedImage {
        path: path.to_path_buf(),
        image,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn decode_generated_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(8, 6, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).expect("decode should succeed");
        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 6);
        assert_eq!(decoded.file_name(), "red.png");
    }

    #[test]
    fn decode_detects_format_by_content() {
        // A PNG saved under a .jpg name must still decode (as PNG).
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misnamed.jpg");
        let img = RgbImage::from_pixel(4, 4, Rgb([0, 128, 0]));
        img.save_with_format(&path, image::ImageFormat::Png).unwrap();

        let decoded = decode_image(&path).expect("content-based detection should win");
        assert_eq!(decoded.width, 4);
    }

    #[test]
    fn decode_corrupt_file_fails_non_fatally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"this is not an image").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, ImageError::DecodeFailed { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn decode_missing_file_reports_read_error() {
        let err = decode_image(Path::new("/nope/missing.png")).unwrap_err();
        assert!(matches!(err, ImageError::ReadFailed { .. }));
    }
}
