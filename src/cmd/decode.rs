use std::io::{Read, Write};

use serde_json::Value;

use crate::domain::Codec;
use crate::domain::error::DecodeError;
use crate::domain::value::{bytes_from_value, bytes_to_value, text_from_value};
use crate::engine::transcode;
use crate::io;

/// Execute `decode` from input stream to output stream.
pub fn run<R: Read, W: Write>(input: R, output: W, codec: Codec) -> Result<(), DecodeError> {
    let value = io::read_value(input).map_err(|source| DecodeError::ReadInput { source })?;
    let decoded = decode_value(&value, codec)?;
    io::write_value(output, &decoded).map_err(|source| DecodeError::WriteOutput { source })
}

/// Decode one JSON payload with the selected codec.
///
/// Exact inverse of `encode::encode_value` for well-formed payloads.
pub fn decode_value(value: &Value, codec: Codec) -> Result<Value, DecodeError> {
    match codec {
        Codec::Bytes => {
            let text = text_from_value(value)
                .map_err(|source| DecodeError::InvalidInput { codec, source })?;
            let bytes = transcode::base64_to_bytes(text)
                .map_err(|source| DecodeError::Decode { codec, source })?;
            Ok(bytes_to_value(&bytes))
        }
        Codec::Text => {
            let text = text_from_value(value)
                .map_err(|source| DecodeError::InvalidInput { codec, source })?;
            let decoded = transcode::base64_to_text(text)
                .map_err(|source| DecodeError::Decode { codec, source })?;
            Ok(Value::String(decoded))
        }
        Codec::Utf8 => {
            let bytes = bytes_from_value(value)
                .map_err(|source| DecodeError::InvalidInput { codec, source })?;
            let decoded = transcode::utf8_bytes_to_text(bytes)
                .map_err(|source| DecodeError::Decode { codec, source })?;
            Ok(Value::String(decoded))
        }
    }
}

pub fn pipeline_steps(codec: Codec) -> Vec<String> {
    vec![
        "read_json_input".to_string(),
        format!("map_{codec}_payload"),
        format!("decode_{codec}"),
        "write_json_output".to_string(),
    ]
}

pub fn deterministic_guards(codec: Codec) -> Vec<String> {
    let mut guards = vec!["pure_transform".to_string(), "reject_malformed".to_string()];
    match codec {
        Codec::Bytes | Codec::Text => guards.push("standard_base64_alphabet".to_string()),
        Codec::Utf8 => guards.push("utf8_exact".to_string()),
    }
    guards
}
