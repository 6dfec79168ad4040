use std::sync::{Arc, Mutex};

use facescan_core::pipeline::detect_faces_use_case::DetectFacesUseCase;

/// Shared across requests. Classifiers are loaded once at startup;
/// scanning mutates them, so requests take turns through the mutex.
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<Mutex<DetectFacesUseCase>>,
    pub library_version: Arc<str>,
}

impl AppState {
    pub fn new(use_case: DetectFacesUseCase, library_version: impl Into<Arc<str>>) -> Self {
        Self {
            use_case: Arc::new(Mutex::new(use_case)),
            library_version: library_version.into(),
        }
    }
}
