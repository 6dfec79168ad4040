use opencv::core::{Mat, Point, Scalar};
use opencv::imgproc;

use crate::annotation::domain::frame_annotator::{face_label, FrameAnnotator};
use crate::detection::domain::detected_face::DetectedFace;
use crate::shared::frame::Frame;
use crate::shared::mat::{copy_mat_into_frame, frame_to_mat};
use crate::shared::BoxError;

const BOX_THICKNESS: i32 = 4;
const FONT_FACE: i32 = imgproc::FONT_HERSHEY_SIMPLEX;
const FONT_SCALE: f64 = 0.8;
const TEXT_THICKNESS: i32 = 2;
/// Vertical room between the label's top edge and its text.
const LABEL_PADDING: i32 = 10;
/// Text baseline sits this far above the box's top edge.
const TEXT_LIFT: i32 = 5;

/// Draws a green box per face with a filled "Face N" tag above its top-left
/// corner, using OpenCV's Hershey font.
pub struct OpencvBoxAnnotator {
    box_color: Scalar,
    text_color: Scalar,
}

impl OpencvBoxAnnotator {
    pub fn new() -> Self {
        Self {
            // Green and black read the same in RGB and BGR order.
            box_color: Scalar::new(0.0, 255.0, 0.0, 0.0),
            text_color: Scalar::all(0.0),
        }
    }

    fn draw_face(&self, mat: &mut Mat, index: usize, face: &DetectedFace) -> opencv::Result<()> {
        let r = face.region;
        imgproc::rectangle_points(
            mat,
            Point::new(r.x, r.y),
            Point::new(r.right(), r.bottom()),
            self.box_color,
            BOX_THICKNESS,
            imgproc::LINE_8,
            0,
        )?;

        let label = face_label(index);
        let mut baseline = 0;
        let text = imgproc::get_text_size(&label, FONT_FACE, FONT_SCALE, TEXT_THICKNESS, &mut baseline)?;

        imgproc::rectangle_points(
            mat,
            Point::new(r.x, r.y - text.height - LABEL_PADDING),
            Point::new(r.x + text.width, r.y),
            self.box_color,
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;
        imgproc::put_text(
            mat,
            &label,
            Point::new(r.x, r.y - TEXT_LIFT),
            FONT_FACE,
            FONT_SCALE,
            self.text_color,
            TEXT_THICKNESS,
            imgproc::LINE_8,
            false,
        )
    }
}

impl Default for OpencvBoxAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAnnotator for OpencvBoxAnnotator {
    fn annotate(&self, frame: &mut Frame, faces: &[DetectedFace]) -> Result<(), BoxError> {
        if faces.is_empty() {
            return Ok(());
        }
        let mut mat = frame_to_mat(frame)?;
        for (i, face) in faces.iter().enumerate() {
            self.draw_face(&mut mat, i, face)?;
        }
        copy_mat_into_frame(&mat, frame)?;
        Ok(())
    }
}
