pub const FACE_CASCADE_NAME: &str = "haarcascade_frontalface_default.xml";
pub const EYE_CASCADE_NAME: &str = "haarcascade_eye.xml";
pub const CASCADE_BASE_URL: &str =
    "https://raw.githubusercontent.com/opencv/opencv/4.x/data/haarcascades";

/// Reported for every face; Haar cascades produce no per-detection score.
pub const FIXED_CONFIDENCE: u32 = 95;

pub const JPEG_QUALITY: u8 = 95;
pub const RESULT_MIME: &str = "image/jpeg";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_MB: usize = 50;

pub fn cascade_url(name: &str) -> String {
    format!("{CASCADE_BASE_URL}/{name}")
}
