use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use facescan_core::pipeline::detection_report::DetectionReport;
use facescan_core::pipeline::pipeline_logger::{PipelineLogger, RequestLogger};

use crate::error::ApiError;
use crate::responses::{
    DetectionRequest, DetectionResponse, HealthResponse, RootResponse, HEALTH_STATUS, ROOT_MESSAGE,
};
use crate::state::AppState;

const RULE: &str = "==================================================";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        opencv_version: state.library_version.to_string(),
    })
}

pub async fn detect_faces(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DetectionResponse>, ApiError> {
    let report = tokio::task::spawn_blocking(move || {
        let mut logger = RequestLogger::new();
        handle_detection(&state, &body, &mut logger)
    })
    .await
    .map_err(|e| {
        log::error!("Detection task failed: {e}");
        ApiError::Internal(format!("detection task failed: {e}"))
    })??;

    Ok(Json(DetectionResponse::from(report)))
}

/// Runs one `/detect-faces` body through the pipeline. Every log line of the
/// request, failures included, sits between two separator rules.
///
/// Malformed JSON fails like every other input error.
pub fn handle_detection(
    state: &AppState,
    body: &[u8],
    logger: &mut dyn PipelineLogger,
) -> Result<DetectionReport, ApiError> {
    logger.info(RULE);
    logger.info("New face detection request received");

    let result = detect(state, body, logger);
    match &result {
        Ok(_) => logger.summary(),
        Err(e) => {
            log::error!("Error: {e}");
            log::error!("Traceback:\n{}", e.trace());
        }
    }

    logger.info(RULE);
    result
}

fn detect(
    state: &AppState,
    body: &[u8],
    logger: &mut dyn PipelineLogger,
) -> Result<DetectionReport, ApiError> {
    let request: DetectionRequest = serde_json::from_slice(body)?;
    let image = request.image.unwrap_or_default();

    let mut use_case = state
        .use_case
        .lock()
        .map_err(|_| ApiError::Internal("detector is unavailable after a panic".into()))?;
    Ok(use_case.execute(&image, logger)?)
}
