pub mod data_url;
pub mod image_decoder;
pub mod image_encoder;
