use serde::Serialize;

use crate::codec::domain::data_url::encode_data_url;
use crate::codec::domain::image_encoder::EncodedImage;
use crate::detection::domain::detected_face::DetectedFace;
use crate::shared::constants::FIXED_CONFIDENCE;

/// Per-face entry of the JSON report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaceSummary {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub confidence: u32,
    pub has_eyes: bool,
}

impl From<&DetectedFace> for FaceSummary {
    fn from(face: &DetectedFace) -> Self {
        let r = face.region;
        Self {
            x: r.x.max(0) as u32,
            y: r.y.max(0) as u32,
            width: r.width.max(0) as u32,
            height: r.height.max(0) as u32,
            confidence: FIXED_CONFIDENCE,
            has_eyes: face.has_eyes,
        }
    }
}

/// Serializable part of a successful detection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetectionSummary {
    pub faces_count: usize,
    pub faces: Vec<FaceSummary>,
    pub image_size: String,
}

/// Outcome of one pipeline run: what was found plus the annotated image.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionReport {
    pub summary: DetectionSummary,
    pub annotated: EncodedImage,
}

impl DetectionReport {
    pub fn new(faces: &[DetectedFace], image_size: String, annotated: EncodedImage) -> Self {
        Self {
            summary: DetectionSummary {
                faces_count: faces.len(),
                faces: faces.iter().map(FaceSummary::from).collect(),
                image_size,
            },
            annotated,
        }
    }

    /// The annotated image as `data:image/jpeg;base64,...`.
    pub fn result_image_data_url(&self) -> String {
        encode_data_url(self.annotated.mime, &self.annotated.bytes)
    }
}
