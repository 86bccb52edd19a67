use std::io::{Read, Write};

use serde_json::Value;

use crate::domain::error::TimeError;
use crate::domain::value::ValueError;
use crate::engine::time::{
    datetime_from_epoch_seconds, datetime_now, format_datetime, parse_datetime,
};
use crate::io;

/// Execute `time` from input stream to output stream.
///
/// This function is intentionally thin: it only coordinates I/O and delegates
/// normalization to the engine layer.
pub fn run<R: Read, W: Write>(input: R, output: W) -> Result<(), TimeError> {
    let value = io::read_value(input).map_err(|source| TimeError::ReadInput { source })?;
    let canonical = canonicalize_value(&value)?;
    io::write_value(output, &canonical).map_err(|source| TimeError::WriteOutput { source })
}

/// Execute `time --now`: emit the current instant in canonical form.
pub fn run_now<W: Write>(output: W) -> Result<(), TimeError> {
    let canonical = Value::String(format_datetime(&datetime_now()));
    io::write_value(output, &canonical).map_err(|source| TimeError::WriteOutput { source })
}

/// Canonicalize one JSON timestamp value.
///
/// Strings go through timestamp parsing; integers are whole epoch seconds.
pub fn canonicalize_value(value: &Value) -> Result<Value, TimeError> {
    let instant = match value {
        Value::String(text) => {
            parse_datetime(text).map_err(|source| TimeError::Normalize { source })?
        }
        Value::Number(number) => {
            let seconds = number.as_i64().ok_or(TimeError::InvalidInput {
                source: ValueError::ExpectedTimestamp,
            })?;
            datetime_from_epoch_seconds(seconds)
                .map_err(|source| TimeError::Normalize { source })?
        }
        _ => {
            return Err(TimeError::InvalidInput {
                source: ValueError::ExpectedTimestamp,
            });
        }
    };
    Ok(Value::String(format_datetime(&instant)))
}

pub fn pipeline_steps(now: bool) -> Vec<String> {
    if now {
        vec![
            "read_clock".to_string(),
            "normalize_utc".to_string(),
            "format_canonical".to_string(),
        ]
    } else {
        vec![
            "read_json_input".to_string(),
            "parse_timestamp".to_string(),
            "normalize_utc".to_string(),
            "format_canonical".to_string(),
        ]
    }
}

pub fn deterministic_guards() -> Vec<String> {
    vec![
        "utc_only".to_string(),
        "second_precision".to_string(),
        "no_zone_suffix".to_string(),
    ]
}
