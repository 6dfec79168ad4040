use std::path::PathBuf;

use crate::detection::domain::object_detector::ObjectDetector;
use crate::shared::constants::{cascade_url, EYE_CASCADE_NAME, FACE_CASCADE_NAME};
use crate::shared::BoxError;

use super::cascade_face_detector::CascadeFaceDetector;
use super::cascade_resolver;
use super::opencv_cascade::OpencvCascade;

/// Where to look for cascade files at startup.
#[derive(Clone, Debug, Default)]
pub struct CascadeSource {
    pub cascade_dir: Option<PathBuf>,
    pub offline: bool,
}

/// Resolves and loads the face and eye cascades into a two-pass detector.
///
/// Fails fast: a missing or empty cascade is a startup error.
pub fn create_face_detector(source: &CascadeSource) -> Result<CascadeFaceDetector, BoxError> {
    let search_dirs = cascade_resolver::search_dirs(source.cascade_dir.as_deref());
    let faces = load(FACE_CASCADE_NAME, &search_dirs, source.offline)?;
    let eyes = load(EYE_CASCADE_NAME, &search_dirs, source.offline)?;
    Ok(CascadeFaceDetector::new(faces, eyes))
}

fn load(
    name: &str,
    search_dirs: &[PathBuf],
    offline: bool,
) -> Result<Box<dyn ObjectDetector>, BoxError> {
    let path = cascade_resolver::resolve(name, &cascade_url(name), search_dirs, !offline)?;
    let cascade = OpencvCascade::load(&path)?;
    log::info!("Loaded cascade {}", path.display());
    Ok(Box::new(cascade))
}
