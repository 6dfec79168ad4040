use image::imageops;

use crate::detection::domain::detected_face::DetectedFace;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::detection::domain::scan_params::{ScanParams, EYE_SCAN, FACE_SCAN};
use crate::shared::frame::Frame;
use crate::shared::BoxError;

use super::opencv_grayscale::equalized_grayscale;

/// Two-pass cascade detector: faces over the whole equalized image, then
/// eyes inside each face crop to set `has_eyes`.
///
/// Eye hits only flag the face; they never move, merge, or drop it.
pub struct CascadeFaceDetector {
    faces: Box<dyn ObjectDetector>,
    eyes: Box<dyn ObjectDetector>,
    face_params: ScanParams,
    eye_params: ScanParams,
}

impl CascadeFaceDetector {
    pub fn new(faces: Box<dyn ObjectDetector>, eyes: Box<dyn ObjectDetector>) -> Self {
        Self::with_params(faces, eyes, FACE_SCAN, EYE_SCAN)
    }

    pub fn with_params(
        faces: Box<dyn ObjectDetector>,
        eyes: Box<dyn ObjectDetector>,
        face_params: ScanParams,
        eye_params: ScanParams,
    ) -> Self {
        Self {
            faces,
            eyes,
            face_params,
            eye_params,
        }
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedFace>, BoxError> {
        let gray = equalized_grayscale(frame)?;

        let regions = self.faces.detect(&gray, &self.face_params)?;

        let mut detected = Vec::with_capacity(regions.len());
        for region in regions {
            let has_eyes = match region.clamped(gray.width(), gray.height()) {
                Some(roi) => {
                    let crop = imageops::crop_imm(
                        &gray,
                        roi.x as u32,
                        roi.y as u32,
                        roi.width as u32,
                        roi.height as u32,
                    )
                    .to_image();
                    !self.eyes.detect(&crop, &self.eye_params)?.is_empty()
                }
                None => false,
            };
            detected.push(DetectedFace::new(region, has_eyes));
        }
        Ok(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::region::Region;
    use image::GrayImage;
    use std::sync::{Arc, Mutex};

    /// Records what it was asked to scan and replays canned results.
    struct FakeObjectDetector {
        results: Vec<Vec<Region>>,
        calls: Arc<Mutex<Vec<((u32, u32), ScanParams)>>>,
        images: Arc<Mutex<Vec<GrayImage>>>,
    }

    impl FakeObjectDetector {
        fn new(results: Vec<Vec<Region>>) -> Self {
            Self {
                results,
                calls: Arc::new(Mutex::new(Vec::new())),
                images: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl ObjectDetector for FakeObjectDetector {
        fn detect(
            &mut self,
            image: &GrayImage,
            params: &ScanParams,
        ) -> Result<Vec<Region>, BoxError> {
            let mut calls = self.calls.lock().unwrap();
            let idx = calls.len();
            calls.push((image.dimensions(), *params));
            self.images.lock().unwrap().push(image.clone());
            Ok(self
                .results
                .get(idx % self.results.len().max(1))
                .cloned()
                .unwrap_or_default())
        }
    }

    struct FailingObjectDetector;

    impl ObjectDetector for FailingObjectDetector {
        fn detect(&mut self, _: &GrayImage, _: &ScanParams) -> Result<Vec<Region>, BoxError> {
            Err("classifier exploded".into())
        }
    }

    fn make_frame(w: u32, h: u32) -> Frame {
        Frame::new(vec![128; (w * h * 3) as usize], w, h, 3)
    }

    #[test]
    fn test_no_faces_skips_eye_pass() {
        let eyes = FakeObjectDetector::new(vec![]);
        let eye_calls = eyes.calls.clone();
        let mut detector =
            CascadeFaceDetector::new(Box::new(FakeObjectDetector::new(vec![vec![]])), Box::new(eyes));

        let faces = detector.detect(&make_frame(100, 100)).unwrap();
        assert!(faces.is_empty());
        assert!(eye_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_face_pass_scans_whole_image_with_face_params() {
        let faces = FakeObjectDetector::new(vec![vec![]]);
        let calls = faces.calls.clone();
        let mut detector =
            CascadeFaceDetector::new(Box::new(faces), Box::new(FakeObjectDetector::new(vec![])));

        detector.detect(&make_frame(120, 80)).unwrap();
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ((120, 80), FACE_SCAN));
    }

    #[test]
    fn test_eye_pass_runs_once_per_face_on_crop() {
        let faces = FakeObjectDetector::new(vec![vec![
            Region::new(10, 10, 40, 30),
            Region::new(60, 50, 20, 25),
        ]]);
        let eyes = FakeObjectDetector::new(vec![vec![]]);
        let eye_calls = eyes.calls.clone();
        let mut detector = CascadeFaceDetector::new(Box::new(faces), Box::new(eyes));

        detector.detect(&make_frame(100, 100)).unwrap();
        let eye_calls = eye_calls.lock().unwrap();
        assert_eq!(eye_calls.len(), 2);
        assert_eq!(eye_calls[0], ((40, 30), EYE_SCAN));
        assert_eq!(eye_calls[1], ((20, 25), EYE_SCAN));
    }

    /// Horizontal and vertical gradient so every crop has distinct pixels.
    fn gradient_frame(w: u32, h: u32) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 2 + y) % 256) as u8;
                data.extend_from_slice(&[v, v / 2, 255 - v]);
            }
        }
        Frame::new(data, w, h, 3)
    }

    #[test]
    fn test_passes_scan_equalized_pixels() {
        let frame = gradient_frame(100, 80);
        let expected = equalized_grayscale(&frame).unwrap();

        let faces = FakeObjectDetector::new(vec![vec![Region::new(10, 20, 40, 30)]]);
        let face_images = faces.images.clone();
        let eyes = FakeObjectDetector::new(vec![vec![]]);
        let eye_images = eyes.images.clone();
        let mut detector = CascadeFaceDetector::new(Box::new(faces), Box::new(eyes));

        detector.detect(&frame).unwrap();

        assert_eq!(face_images.lock().unwrap()[0], expected);
        let expected_crop = imageops::crop_imm(&expected, 10, 20, 40, 30).to_image();
        assert_eq!(eye_images.lock().unwrap()[0], expected_crop);
    }

    #[test]
    fn test_eye_crop_is_clamped_to_image() {
        let frame = gradient_frame(60, 60);
        let expected = equalized_grayscale(&frame).unwrap();

        let faces = FakeObjectDetector::new(vec![vec![Region::new(40, -5, 30, 30)]]);
        let eyes = FakeObjectDetector::new(vec![vec![]]);
        let eye_images = eyes.images.clone();
        let mut detector = CascadeFaceDetector::new(Box::new(faces), Box::new(eyes));

        detector.detect(&frame).unwrap();

        let expected_crop = imageops::crop_imm(&expected, 40, 0, 20, 25).to_image();
        assert_eq!(eye_images.lock().unwrap()[0], expected_crop);
    }

    #[test]
    fn test_has_eyes_reflects_eye_hits_per_face() {
        let faces = FakeObjectDetector::new(vec![vec![
            Region::new(0, 0, 40, 40),
            Region::new(50, 50, 40, 40),
        ]]);
        let eyes = FakeObjectDetector::new(vec![vec![Region::new(5, 5, 8, 8)], vec![]]);
        let mut detector = CascadeFaceDetector::new(Box::new(faces), Box::new(eyes));

        let detected = detector.detect(&make_frame(100, 100)).unwrap();
        assert_eq!(detected.len(), 2);
        assert!(detected[0].has_eyes);
        assert!(!detected[1].has_eyes);
    }

    #[test]
    fn test_preserves_face_order_and_geometry() {
        let regions = vec![Region::new(70, 5, 20, 20), Region::new(3, 60, 30, 30)];
        let faces = FakeObjectDetector::new(vec![regions.clone()]);
        let mut detector =
            CascadeFaceDetector::new(Box::new(faces), Box::new(FakeObjectDetector::new(vec![])));

        let detected = detector.detect(&make_frame(100, 100)).unwrap();
        let got: Vec<Region> = detected.iter().map(|f| f.region).collect();
        assert_eq!(got, regions);
    }

    #[test]
    fn test_face_outside_image_has_no_eyes() {
        let faces = FakeObjectDetector::new(vec![vec![Region::new(200, 200, 30, 30)]]);
        let eyes = FakeObjectDetector::new(vec![vec![Region::new(0, 0, 5, 5)]]);
        let eye_calls = eyes.calls.clone();
        let mut detector = CascadeFaceDetector::new(Box::new(faces), Box::new(eyes));

        let detected = detector.detect(&make_frame(100, 100)).unwrap();
        assert_eq!(detected.len(), 1);
        assert!(!detected[0].has_eyes);
        assert!(eye_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_classifier_error_propagates() {
        let mut detector = CascadeFaceDetector::new(
            Box::new(FailingObjectDetector),
            Box::new(FakeObjectDetector::new(vec![])),
        );
        let err = detector.detect(&make_frame(10, 10)).unwrap_err();
        assert_eq!(err.to_string(), "classifier exploded");
    }

    #[test]
    fn test_non_rgb_frame_is_rejected() {
        let mut detector = CascadeFaceDetector::new(
            Box::new(FakeObjectDetector::new(vec![])),
            Box::new(FakeObjectDetector::new(vec![])),
        );
        let frame = Frame::new(vec![0u8; 16], 4, 4, 1);
        assert!(detector.detect(&frame).is_err());
    }
}
