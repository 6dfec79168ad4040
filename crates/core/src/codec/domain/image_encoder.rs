use crate::shared::frame::Frame;
use crate::shared::BoxError;

/// Compressed image bytes plus the MIME type to advertise them with.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Encodes a frame for transport.
pub trait ImageEncoder: Send {
    fn encode(&self, frame: &Frame) -> Result<EncodedImage, BoxError>;
}
