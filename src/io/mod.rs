use std::io::{Read, Write};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read exactly one JSON value from the input stream.
pub fn read_value<R: Read>(mut reader: R) -> Result<Value, IoError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(raw.trim())?)
}

/// Write one JSON value compactly, followed by a newline.
pub fn write_value<W: Write>(mut writer: W, value: &Value) -> Result<(), IoError> {
    let serialized = serde_json::to_string(value)?;
    writeln!(writer, "{serialized}")?;
    Ok(())
}
