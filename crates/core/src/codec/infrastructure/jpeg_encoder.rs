use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::ExtendedColorType;

use crate::codec::domain::image_encoder::{EncodedImage, ImageEncoder};
use crate::shared::constants::{JPEG_QUALITY, RESULT_MIME};
use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Encodes RGB frames as baseline JPEG.
pub struct JpegEncoder {
    quality: u8,
}

impl JpegEncoder {
    /// `quality` is clamped to 1..=100.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for JpegEncoder {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl ImageEncoder for JpegEncoder {
    fn encode(&self, frame: &Frame) -> Result<EncodedImage, BoxError> {
        if frame.channels() != 3 {
            return Err(format!("JPEG encoder expects RGB, got {} channel(s)", frame.channels()).into());
        }
        let mut bytes = Vec::new();
        ImageJpegEncoder::new_with_quality(&mut bytes, self.quality).encode(
            frame.data(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(EncodedImage {
            mime: RESULT_MIME,
            bytes,
        })
    }
}
