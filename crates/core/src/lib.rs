//! Face detection pipeline: decode a base64 image, run Haar cascades,
//! annotate the matches and re-encode the result.

pub mod annotation;
pub mod codec;
pub mod detection;
pub mod pipeline;
pub mod shared;
