//! Standard-alphabet base64 behind a narrow module boundary.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;

pub use ::base64::DecodeError;

/// Encodes `bytes` with the standard alphabet, `=`-padded.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard-alphabet base64.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(text)
}
