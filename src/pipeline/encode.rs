//! Image encoding: `DynamicImage` → in-memory PNG bytes.
//!
//! The Word container stores pictures as encoded streams, and consumers are
//! only guaranteed to render the common web formats. Re-encoding every
//! source as PNG means a TIFF or BMP input embeds just as reliably as a
//! JPEG, at the cost of one lossless re-compression.

use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Encode a decoded image as PNG bytes ready for container embedding.
pub fn to_png_bytes(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    debug!("encoded image → {} PNG bytes", buf.len());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encode_small_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let bytes = to_png_bytes(&img).expect("encode should succeed");
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
        // And it decodes back to the same dimensions.
        let back = image::load_from_memory(&bytes).expect("valid PNG");
        assert_eq!(back.width(), 10);
        assert_eq!(back.height(), 10);
    }
}
