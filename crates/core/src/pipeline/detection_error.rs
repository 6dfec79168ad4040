use std::error::Error as _;

use thiserror::Error;

use crate::shared::BoxError;

/// Every way a detection request can fail. The HTTP layer maps all of them
/// to the same 400 response.
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("No image provided")]
    MissingImage,
    #[error("invalid base64 image data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("cannot identify image file: {0}")]
    Decode(#[source] BoxError),
    #[error("face detection failed: {0}")]
    Detection(#[source] BoxError),
    #[error("failed to annotate image: {0}")]
    Annotation(#[source] BoxError),
    #[error("failed to encode result image: {0}")]
    Encode(#[source] BoxError),
}

impl DetectionError {
    /// Multi-line diagnostic: the error followed by each `source()` in turn.
    pub fn trace(&self) -> String {
        let mut lines = vec![format!("{self:?}")];
        let mut source = self.source();
        while let Some(cause) = source {
            lines.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        lines.join("\n")
    }
}
