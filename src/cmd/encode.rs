use std::io::{Read, Write};

use serde_json::Value;

use crate::domain::Codec;
use crate::domain::error::EncodeError;
use crate::domain::value::{bytes_from_value, bytes_to_value, text_from_value};
use crate::engine::transcode;
use crate::io;

/// Execute `encode` from input stream to output stream.
pub fn run<R: Read, W: Write>(input: R, output: W, codec: Codec) -> Result<(), EncodeError> {
    let value = io::read_value(input).map_err(|source| EncodeError::ReadInput { source })?;
    let encoded = encode_value(&value, codec)?;
    io::write_value(output, &encoded).map_err(|source| EncodeError::WriteOutput { source })
}

/// Encode one JSON payload with the selected codec.
pub fn encode_value(value: &Value, codec: Codec) -> Result<Value, EncodeError> {
    match codec {
        Codec::Bytes => {
            let bytes = bytes_from_value(value)
                .map_err(|source| EncodeError::InvalidInput { codec, source })?;
            Ok(Value::String(transcode::bytes_to_base64(&bytes)))
        }
        Codec::Text => {
            let text = text_from_value(value)
                .map_err(|source| EncodeError::InvalidInput { codec, source })?;
            Ok(Value::String(transcode::text_to_base64(text)))
        }
        Codec::Utf8 => {
            let text = text_from_value(value)
                .map_err(|source| EncodeError::InvalidInput { codec, source })?;
            Ok(bytes_to_value(&transcode::text_to_utf8_bytes(text)))
        }
    }
}

pub fn pipeline_steps(codec: Codec) -> Vec<String> {
    vec![
        "read_json_input".to_string(),
        format!("map_{codec}_payload"),
        format!("encode_{codec}"),
        "write_json_output".to_string(),
    ]
}

pub fn deterministic_guards(codec: Codec) -> Vec<String> {
    let mut guards = vec!["pure_transform".to_string()];
    match codec {
        Codec::Bytes | Codec::Text => guards.push("standard_base64_alphabet".to_string()),
        Codec::Utf8 => guards.push("utf8_exact".to_string()),
    }
    guards
}
