//! Configuration types for image-to-document conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across the three emitters and to diff two runs
//! to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The builder lets callers set only what they care about and rely on
//! well-documented defaults for the rest. The CLI binaries use the defaults
//! unchanged.

use crate::error::Img2DocError;

/// Configuration for an image-to-document conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use img2doc::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(150.0)
///     .picture_width_in(5.9)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Displayed image width in the Word document, in inches. Default: 5.9.
    ///
    /// 5.9 in is roughly 15 cm — the widest an image can be on an A4 page
    /// with ordinary margins. Height is always derived from the source
    /// aspect ratio, so this single number fully determines the layout.
    pub picture_width_in: f32,

    /// Pixel-to-page-size conversion for PDF pages. Range: 36–600. Default: 150.
    ///
    /// PDF pages are sized exactly to the image: a 1500×2100 px scan at
    /// 150 DPI becomes a 10×14 in page. Raise this to shrink pages produced
    /// from high-resolution sources; lower it for small thumbnails that
    /// should still print at a readable size.
    pub dpi: f32,

    /// Caption each Word page with the source file name. Default: true.
    pub label_pages: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            picture_width_in: 5.9,
            dpi: 150.0,
            label_pages: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn picture_width_in(mut self, inches: f32) -> Self {
        self.config.picture_width_in = inches.clamp(1.0, 8.0);
        self
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.config.dpi = dpi.clamp(36.0, 600.0);
        self
    }

    pub fn label_pages(mut self, v: bool) -> Self {
        self.config.label_pages = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Img2DocError> {
        let c = &self.config;
        if !(36.0..=600.0).contains(&c.dpi) {
            return Err(Img2DocError::InvalidConfig(format!(
                "DPI must be 36–600, got {}",
                c.dpi
            )));
        }
        if !(1.0..=8.0).contains(&c.picture_width_in) {
            return Err(Img2DocError::InvalidConfig(format!(
                "picture width must be 1.0–8.0 in, got {}",
                c.picture_width_in
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ConversionConfig::builder().build().expect("valid config");
        assert!((config.picture_width_in - 5.9).abs() < f32::EPSILON);
        assert!((config.dpi - 150.0).abs() < f32::EPSILON);
        assert!(config.label_pages);
    }

    #[test]
    fn setters_clamp_out_of_range_values() {
        let config = ConversionConfig::builder()
            .dpi(10_000.0)
            .picture_width_in(0.1)
            .build()
            .expect("clamped values must pass validation");
        assert!((config.dpi - 600.0).abs() < f32::EPSILON);
        assert!((config.picture_width_in - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn build_rejects_direct_out_of_range_dpi() {
        let mut builder = ConversionConfig::builder();
        builder.config.dpi = 12.0;
        assert!(matches!(
            builder.build(),
            Err(Img2DocError::InvalidConfig(_))
        ));
    }
}
