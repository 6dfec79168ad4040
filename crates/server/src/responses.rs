use facescan_core::pipeline::detection_report::{DetectionReport, DetectionSummary};
use serde::{Deserialize, Serialize};

pub const HEALTH_STATUS: &str = "Face Detection Service is running";
pub const ROOT_MESSAGE: &str = "Face Detection API is running";

#[derive(Debug, Deserialize)]
pub struct DetectionRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: DetectionSummary,
    pub result_image: String,
}

impl From<DetectionReport> for DetectionResponse {
    fn from(report: DetectionReport) -> Self {
        let result_image = report.result_image_data_url();
        Self {
            success: true,
            summary: report.summary,
            result_image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub trace: String,
}

impl ErrorResponse {
    pub fn new(error: String, trace: String) -> Self {
        Self {
            success: false,
            error,
            trace,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub opencv_version: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
