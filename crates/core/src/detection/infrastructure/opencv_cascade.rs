//! Haar cascade classifier backed by OpenCV's `objdetect` module.

use std::path::{Path, PathBuf};

use image::GrayImage;
use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::{self, CascadeClassifier};
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::object_detector::ObjectDetector;
use crate::detection::domain::scan_params::ScanParams;
use crate::shared::mat::gray_to_mat;
use crate::shared::region::Region;
use crate::shared::BoxError;

#[derive(Error, Debug)]
pub enum CascadeLoadError {
    #[error("failed to load cascade {path}: {source}")]
    OpenCv {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade {0} loaded but contains no stages")]
    Empty(PathBuf),
}

pub struct OpencvCascade {
    classifier: CascadeClassifier,
}

// Safety: the classifier is only touched through `&mut self`, so it is never
// used from two threads at once.
unsafe impl Send for OpencvCascade {}

impl OpencvCascade {
    pub fn load(path: &Path) -> Result<Self, CascadeLoadError> {
        let opencv_err = |source| CascadeLoadError::OpenCv {
            path: path.to_path_buf(),
            source,
        };
        let classifier =
            CascadeClassifier::new(&path.to_string_lossy()).map_err(opencv_err)?;
        if classifier.empty().map_err(opencv_err)? {
            return Err(CascadeLoadError::Empty(path.to_path_buf()));
        }
        Ok(Self { classifier })
    }
}

impl ObjectDetector for OpencvCascade {
    fn detect(&mut self, image: &GrayImage, params: &ScanParams) -> Result<Vec<Region>, BoxError> {
        let mat = gray_to_mat(image)?;
        let mut objects = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &mat,
            &mut objects,
            params.scale_factor,
            params.min_neighbors,
            objdetect::CASCADE_SCALE_IMAGE,
            to_size(params.min_size),
            to_size(params.max_size),
        )?;
        Ok(objects
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}

/// OpenCV treats a zero size as "no bound".
fn to_size(bound: Option<(u32, u32)>) -> Size {
    bound
        .map(|(w, h)| Size::new(w as i32, h as i32))
        .unwrap_or_default()
}

/// Version of the linked OpenCV library, e.g. `"4.8.0"`.
pub fn opencv_version() -> String {
    opencv::core::get_version_string()
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
