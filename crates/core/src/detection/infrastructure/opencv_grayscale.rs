use image::GrayImage;
use opencv::core::Mat;
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;
use crate::shared::mat::frame_to_mat;

/// Luma of an RGB frame followed by OpenCV's global histogram equalization:
/// the input every cascade pass scans.
pub fn equalized_grayscale(frame: &Frame) -> opencv::Result<GrayImage> {
    let rgb = frame_to_mat(frame)?;
    let mut gray = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut gray, imgproc::COLOR_RGB2GRAY)?;
    let mut equalized = Mat::default();
    imgproc::equalize_hist(&gray, &mut equalized)?;

    let bytes = equalized.data_bytes()?.to_vec();
    GrayImage::from_raw(frame.width(), frame.height(), bytes).ok_or_else(|| {
        opencv::Error::new(
            opencv::core::StsUnmatchedSizes,
            format!(
                "equalized image does not match {}",
                frame.size_label()
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> Frame {
        let data = rgb.iter().copied().cycle().take((w * h * 3) as usize).collect();
        Frame::new(data, w, h, 3)
    }

    fn gray_levels(levels: &[u8]) -> Frame {
        let data = levels.iter().flat_map(|&v| [v, v, v]).collect();
        Frame::new(data, levels.len() as u32, 1, 3)
    }

    #[rstest]
    #[case::red([255, 0, 0], 76)]
    #[case::green([0, 255, 0], 150)]
    #[case::blue([0, 0, 255], 29)]
    fn test_luma_weights_on_uniform_color(#[case] rgb: [u8; 3], #[case] expected: u8) {
        // A single-level image is left as-is by equalization.
        let gray = equalized_grayscale(&solid(3, 2, rgb)).unwrap();
        assert!(gray.pixels().all(|p| p.0[0] == expected));
    }

    #[test]
    fn test_preserves_dimensions() {
        let gray = equalized_grayscale(&solid(7, 5, [10, 20, 30])).unwrap();
        assert_eq!(gray.dimensions(), (7, 5));
    }

    #[test]
    fn test_uniform_image_is_unchanged() {
        let gray = equalized_grayscale(&gray_levels(&[90; 8])).unwrap();
        assert!(gray.pixels().all(|p| p.0[0] == 90));
    }

    #[test]
    fn test_two_levels_stretch_to_full_range() {
        let gray = equalized_grayscale(&gray_levels(&[100, 100, 100, 100, 110, 110, 110, 110]))
            .unwrap();
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(7, 0).0[0], 255);
    }

    #[test]
    fn test_lowest_level_maps_to_zero_and_order_is_kept() {
        let gray = equalized_grayscale(&gray_levels(&[40, 40, 80, 80, 80, 200, 200, 200])).unwrap();
        let values: Vec<u8> = gray.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values[0], 0);
        assert_eq!(values[7], 255);
        assert!(values[0] < values[2] && values[2] < values[5]);
    }

    #[test]
    fn test_non_rgb_frame_is_rejected() {
        let frame = Frame::new(vec![0u8; 16], 4, 4, 1);
        assert!(equalized_grayscale(&frame).is_err());
    }
}
