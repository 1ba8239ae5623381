//! Text-safe transport encoding for image bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ChartError, Result};

/// Standard, padded base64.
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_image(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| ChartError::BadRequest(format!("invalid base64: {e}")))
}
