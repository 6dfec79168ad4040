use crate::detection::domain::detected_face::DetectedFace;
use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Domain interface for drawing detection overlays onto a frame.
///
/// Implementations modify the frame in place; output dimensions never change.
pub trait FrameAnnotator: Send {
    fn annotate(&self, frame: &mut Frame, faces: &[DetectedFace]) -> Result<(), BoxError>;
}

/// Caption drawn above the face at `index` (zero-based) in detection order.
pub fn face_label(index: usize) -> String {
    format!("Face {}", index + 1)
}
