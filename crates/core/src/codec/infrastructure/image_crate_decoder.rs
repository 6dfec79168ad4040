use crate::codec::domain::image_decoder::ImageDecoder;
use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Decodes any format the `image` crate recognizes, sniffing the format
/// from the bytes rather than trusting a declared MIME type.
///
/// Alpha is dropped and grayscale is expanded so every frame is RGB.
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageCrateDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, BoxError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &image::DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_dimensions_and_pixels() {
        let img = RgbImage::from_pixel(30, 20, Rgb([50, 100, 200]));
        let frame = ImageCrateDecoder::new()
            .decode(&png_bytes(&img.into()))
            .unwrap();
        assert_eq!(frame.width(), 30);
        assert_eq!(frame.height(), 20);
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 40]));
        let frame = ImageCrateDecoder::new()
            .decode(&png_bytes(&img.into()))
            .unwrap();
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data().len(), 4 * 4 * 3);
        assert_eq!(&frame.data()[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(ImageCrateDecoder::new().decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(ImageCrateDecoder::new().decode(&[]).is_err());
    }
}
