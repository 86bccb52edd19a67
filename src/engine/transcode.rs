use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("malformed base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid utf-8 input: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode a standard-alphabet, padded base64 string into bytes.
pub fn base64_to_bytes(input: &str) -> Result<Vec<u8>, TranscodeError> {
    Ok(STANDARD.decode(input)?)
}

/// Encode bytes as a standard-alphabet, padded base64 string.
pub fn bytes_to_base64(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Encode a text string as its UTF-8 byte sequence.
pub fn text_to_utf8_bytes(input: &str) -> Vec<u8> {
    input.as_bytes().to_vec()
}

/// Decode a UTF-8 byte sequence into a text string.
///
/// Invalid sequences are rejected, never replaced with U+FFFD.
pub fn utf8_bytes_to_text(input: Vec<u8>) -> Result<String, TranscodeError> {
    Ok(String::from_utf8(input)?)
}

/// Encode a text string as base64 over its UTF-8 bytes.
pub fn text_to_base64(input: &str) -> String {
    bytes_to_base64(input.as_bytes())
}

/// Decode a base64 string carrying UTF-8 text back into the text string.
pub fn base64_to_text(input: &str) -> Result<String, TranscodeError> {
    utf8_bytes_to_text(base64_to_bytes(input)?)
}
