pub mod image_crate_decoder;
pub mod jpeg_encoder;
