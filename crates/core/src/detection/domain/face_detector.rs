use crate::detection::domain::detected_face::DetectedFace;
use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Domain interface for face detection over a decoded frame.
///
/// Results are ordered as the underlying classifier reports them.
/// `&mut self` because classifier handles are mutated while scanning.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedFace>, BoxError>;
}
