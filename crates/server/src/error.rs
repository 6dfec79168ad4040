use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use facescan_core::pipeline::detection_error::DetectionError;
use thiserror::Error;

use crate::responses::ErrorResponse;

/// Anything that can go wrong while serving `/detect-faces`.
///
/// Client mistakes and internal failures share one status code: 400.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    Detection(#[from] DetectionError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn trace(&self) -> String {
        match self {
            ApiError::Detection(e) => e.trace(),
            other => format!("{other:?}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.to_string(), self.trace());
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
