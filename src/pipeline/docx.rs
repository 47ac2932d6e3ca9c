//! Word emitter: one image per page in a single `.docx`.
//!
//! Pages are laid out in insertion order: an explicit page-break run before
//! every page except the first, an optional caption paragraph holding the
//! source file name, then the picture itself. Display width is fixed by
//! configuration; height follows the source aspect ratio. The document is
//! held in memory and written to disk exactly once by [`DocxEmitter::save`].

use crate::config::ConversionConfig;
use crate::error::Img2DocError;
use crate::pipeline::decode::DecodedImage;
use crate::pipeline::encode;
use docx_rs::{BreakType, Docx, Paragraph, Pic, Run};
use std::path::Path;
use tracing::debug;

/// EMU (English Metric Units) per inch, the unit `docx` picture sizes use.
const EMU_PER_INCH: f32 = 914_400.0;

/// Accumulates one page per image, then serializes once.
pub struct DocxEmitter {
    paragraphs: Vec<Paragraph>,
    pages: usize,
    picture_width_emu: u32,
    label_pages: bool,
}

impl DocxEmitter {
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            paragraphs: Vec::new(),
            pages: 0,
            picture_width_emu: (config.picture_width_in * EMU_PER_INCH) as u32,
            label_pages: config.label_pages,
        }
    }

    /// Append one image as a new page.
    ///
    /// The image is re-encoded as PNG before embedding so every recognized
    /// source format lands in the container as a stream Word renders.
    pub fn add_page(&mut self, image: &DecodedImage) -> Result<(), Img2DocError> {
        let png = encode::to_png_bytes(&image.image).map_err(|e| {
            Img2DocError::DocumentBuildFailed {
                path: image.path.clone(),
                detail: format!("PNG re-encode failed: {e}"),
            }
        })?;

        let (width_emu, height_emu) = self.display_size_emu(image.width, image.height);

        if self.pages > 0 {
            self.paragraphs
                .push(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
        }
        if self.label_pages {
            self.paragraphs
                .push(Paragraph::new().add_run(Run::new().add_text(image.file_name())));
        }
        self.paragraphs.push(
            Paragraph::new()
                .add_run(Run::new().add_image(Pic::new(&png).size(width_emu, height_emu))),
        );
        self.pages += 1;

        debug!(
            "docx page {}: {} ({}x{} px → {}x{} EMU)",
            self.pages,
            image.file_name(),
            image.width,
            image.height,
            width_emu,
            height_emu
        );
        Ok(())
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Write the accumulated document to `path`, creating parent
    /// directories as needed. Consumes the emitter: the document is flushed
    /// exactly once.
    pub fn save(self, path: &Path) -> Result<(), Img2DocError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Img2DocError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = std::fs::File::create(path).map_err(|e| Img2DocError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut doc = Docx::new();
        for paragraph in self.paragraphs {
            doc = doc.add_paragraph(paragraph);
        }
        doc.build()
            .pack(file)
            .map_err(|e| Img2DocError::DocumentBuildFailed {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
        Ok(())
    }

    /// Displayed picture size: fixed width, aspect-derived height.
    fn display_size_emu(&self, px_width: u32, px_height: u32) -> (u32, u32) {
        let width = self.picture_width_emu;
        let height = (width as f64 * px_height as f64 / px_width.max(1) as f64) as u32;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::path::PathBuf;

    fn decoded(name: &str, w: u32, h: u32) -> DecodedImage {
        DecodedImage {
            path: PathBuf::from(name),
            image: DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([9, 9, 9]))),
            width: w,
            height: h,
        }
    }

    #[test]
    fn display_size_preserves_aspect_ratio() {
        let config = ConversionConfig::default();
        let emitter = DocxEmitter::new(&config);
        let (w, h) = emitter.display_size_emu(200, 100);
        assert_eq!(w, (5.9 * EMU_PER_INCH) as u32);
        assert_eq!(h, w / 2);
    }

    #[test]
    fn pages_accumulate_in_order() {
        let config = ConversionConfig::default();
        let mut emitter = DocxEmitter::new(&config);
        emitter.add_page(&decoded("a.png", 10, 10)).unwrap();
        emitter.add_page(&decoded("b.png", 10, 10)).unwrap();
        assert_eq!(emitter.page_count(), 2);
        // break + caption + image for the second page, no break before the first
        assert_eq!(emitter.paragraphs.len(), 5);
    }

    #[test]
    fn captions_can_be_disabled() {
        let config = ConversionConfig::builder()
            .label_pages(false)
            .build()
            .unwrap();
        let mut emitter = DocxEmitter::new(&config);
        emitter.add_page(&decoded("a.png", 10, 10)).unwrap();
        assert_eq!(emitter.paragraphs.len(), 1);
    }

    #[test]
    fn save_writes_a_zip_container() {
        let config = ConversionConfig::default();
        let mut emitter = DocxEmitter::new(&config);
        emitter.add_page(&decoded("a.png", 12, 8)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.docx");
        emitter.save(&out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04", "docx must be a zip archive");
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let config = ConversionConfig::default();
        let emitter = DocxEmitter::new(&config);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("deep/nested/out.docx");
        emitter.save(&out).unwrap();
        assert!(out.exists());
    }
}
