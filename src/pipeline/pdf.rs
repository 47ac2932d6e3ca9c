//! PDF emitters — build paginated documents from decoded images using
//! `printpdf` 0.8.
//!
//! printpdf 0.8 uses a data-oriented API: documents are built by
//! constructing `PdfPage` structs containing `Vec<Op>` operation lists,
//! then serialised via `PdfDocument::save()`.
//!
//! Each page is sized exactly to its image at the configured DPI, so the
//! image fills the page edge to edge. Pixel data is normalized to RGB8
//! before embedding: alpha, grayscale, and palette sources all convert.

use crate::error::Img2DocError;
use image::DynamicImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::path::Path;
use tracing::debug;

const MM_PER_INCH: f32 = 25.4;

/// Accumulates one PDF page per image, then serializes once.
pub struct PdfBuilder {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    dpi: f32,
}

impl PdfBuilder {
    /// Create a builder. `title` lands in the PDF /Info dictionary.
    pub fn new(title: &str, dpi: f32) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            dpi,
        }
    }

    /// Append one image as a new page sized exactly to the image.
    pub fn push_page(&mut self, image: &DynamicImage) {
        let rgb = image.to_rgb8();
        let (px_w, px_h) = rgb.dimensions();

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: px_w as usize,
            height: px_h as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.doc.add_image(&raw);

        let page_w = Mm(px_w as f32 / self.dpi * MM_PER_INCH);
        let page_h = Mm(px_h as f32 / self.dpi * MM_PER_INCH);

        // At `dpi`, the image's natural size equals the page; place it at
        // the origin with no scaling.
        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(1.0),
                scale_y: Some(1.0),
                dpi: Some(self.dpi),
                rotate: None,
            },
        }];

        self.pages.push(PdfPage::new(page_w, page_h, ops));
        debug!(
            "pdf page {}: {}x{} px at {} dpi",
            self.pages.len(),
            px_w,
            px_h,
            self.dpi
        );
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the accumulated document to bytes. Consumes the builder.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.doc.with_pages(self.pages);
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        self.doc.save(&PdfSaveOptions::default(), &mut warnings)
    }
}

/// Build a single-page PDF for one image and return its bytes.
pub fn single_page_pdf(title: &str, image: &DynamicImage, dpi: f32) -> Vec<u8> {
    let mut builder = PdfBuilder::new(title, dpi);
    builder.push_page(image);
    builder.into_bytes()
}

/// Write serialized PDF bytes to `path`, creating parent directories as
/// needed.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<(), Img2DocError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Img2DocError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    std::fs::write(path, bytes).map_err(|e| Img2DocError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn count_page_objects(bytes: &[u8]) -> usize {
        lopdf::Document::load_mem(bytes)
            .expect("builder output must parse as PDF")
            .get_pages()
            .len()
    }

    #[test]
    fn multi_page_document_has_one_page_per_image() {
        let mut builder = PdfBuilder::new("test", 150.0);
        for _ in 0..3 {
            builder.push_page(&DynamicImage::ImageRgb8(RgbImage::from_pixel(
                20,
                10,
                Rgb([1, 2, 3]),
            )));
        }
        assert_eq!(builder.page_count(), 3);

        let bytes = builder.into_bytes();
        assert_eq!(&bytes[..4], b"%PDF");
        assert_eq!(count_page_objects(&bytes), 3);
    }

    #[test]
    fn rgba_input_is_accepted() {
        // to_rgb8 normalization must make alpha sources embeddable.
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(5, 5, Rgba([10, 20, 30, 128])));
        let bytes = single_page_pdf("alpha", &img, 150.0);
        assert_eq!(count_page_objects(&bytes), 1);
    }

    #[test]
    fn write_pdf_creates_parent_dirs() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));
        let bytes = single_page_pdf("t", &img, 150.0);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a/b/out.pdf");
        write_pdf(&out, &bytes).unwrap();
        assert!(out.exists());
    }
}
