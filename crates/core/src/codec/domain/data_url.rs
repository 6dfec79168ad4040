use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};

/// Standard alphabet, padding optional. Browsers and hand-built payloads
/// disagree on trailing `=`.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded `data:<mime>;base64,<payload>` string, or bare base64.
#[derive(Clone, Debug, PartialEq)]
pub struct DataUrl {
    /// Everything before the first comma, when present (`data:image/png;base64`).
    pub header: Option<String>,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Splits off an optional header at the first comma and base64-decodes
    /// the remainder. ASCII whitespace anywhere in the payload is ignored,
    /// so line-wrapped base64 decodes.
    pub fn parse(input: &str) -> Result<Self, DecodeError> {
        let (header, payload) = match input.split_once(',') {
            Some((header, payload)) => (Some(header.trim().to_string()), payload),
            None => (None, input),
        };
        let compact: String = payload.split_ascii_whitespace().collect();
        let bytes = LENIENT.decode(compact)?;
        Ok(Self { header, bytes })
    }

    /// MIME type from the header, e.g. `image/png`.
    pub fn mime(&self) -> Option<&str> {
        let header = self.header.as_deref()?;
        let rest = header.strip_prefix("data:")?;
        let mime = rest.split(';').next()?;
        (!mime.is_empty()).then_some(mime)
    }
}

/// Formats bytes as a base64 data URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
