use image::GrayImage;

use crate::detection::domain::scan_params::ScanParams;
use crate::shared::region::Region;
use crate::shared::BoxError;

/// A single pre-trained classifier (faces, eyes, ...) scanned over a
/// grayscale image at multiple scales.
pub trait ObjectDetector: Send {
    fn detect(&mut self, image: &GrayImage, params: &ScanParams) -> Result<Vec<Region>, BoxError>;
}
