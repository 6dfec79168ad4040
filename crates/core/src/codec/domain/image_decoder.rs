use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Decodes compressed image bytes (JPEG, PNG, ...) into an RGB frame.
pub trait ImageDecoder: Send {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, BoxError>;
}
