use serde_json::Value;
use thiserror::Error;

/// Errors mapping JSON payloads to codec inputs.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("input value must be a json string")]
    ExpectedString,

    #[error("input value must be a json string or whole epoch seconds")]
    ExpectedTimestamp,

    #[error("input value must be a json array of byte values")]
    ExpectedByteArray,

    #[error("byte array element {index} is not a value in 0..=255: {found}")]
    ByteOutOfRange { index: usize, found: Value },
}

/// Interpret a JSON value as a text string.
pub fn text_from_value(value: &Value) -> Result<&str, ValueError> {
    value.as_str().ok_or(ValueError::ExpectedString)
}

/// Interpret a JSON value as a byte sequence (array of integers 0..=255).
pub fn bytes_from_value(value: &Value) -> Result<Vec<u8>, ValueError> {
    let items = value.as_array().ok_or(ValueError::ExpectedByteArray)?;
    let mut bytes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let byte = item
            .as_u64()
            .and_then(|raw| u8::try_from(raw).ok())
            .ok_or_else(|| ValueError::ByteOutOfRange {
                index,
                found: item.clone(),
            })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Render a byte sequence as a JSON array of integers.
pub fn bytes_to_value(bytes: &[u8]) -> Value {
    Value::Array(bytes.iter().map(|byte| Value::from(*byte)).collect())
}
