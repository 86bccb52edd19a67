use thiserror::Error;

use crate::domain::Codec;
use crate::domain::value::ValueError;
use crate::engine::time::TimestampError;
use crate::engine::transcode::TranscodeError;
use crate::io::IoError;

/// Errors produced by the `time` command boundary.
#[derive(Debug, Error)]
pub enum TimeError {
    /// Input could not be read as a JSON value.
    #[error("failed to read json input: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },

    /// Input value was neither a string nor whole epoch seconds.
    #[error("invalid time input: {source}")]
    InvalidInput {
        #[source]
        source: ValueError,
    },

    /// Input could not be interpreted as an instant.
    #[error("failed to normalize timestamp: {source}")]
    Normalize {
        #[source]
        source: TimestampError,
    },

    /// Output could not be serialized.
    #[error("failed to write json output: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}

/// Errors produced by the `encode` command boundary.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input could not be read as a JSON value.
    #[error("failed to read json input: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },

    /// Input value did not match the shape the codec expects.
    #[error("invalid {codec} encode input: {source}")]
    InvalidInput {
        codec: Codec,
        #[source]
        source: ValueError,
    },

    /// Output could not be serialized.
    #[error("failed to write json output: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}

/// Errors produced by the `decode` command boundary.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input could not be read as a JSON value.
    #[error("failed to read json input: {source}")]
    ReadInput {
        #[source]
        source: IoError,
    },

    /// Input value did not match the shape the codec expects.
    #[error("invalid {codec} decode input: {source}")]
    InvalidInput {
        codec: Codec,
        #[source]
        source: ValueError,
    },

    /// Payload was well-shaped JSON but malformed for the codec.
    #[error("failed to decode {codec} payload: {source}")]
    Decode {
        codec: Codec,
        #[source]
        source: TranscodeError,
    },

    /// Output could not be serialized.
    #[error("failed to write json output: {source}")]
    WriteOutput {
        #[source]
        source: IoError,
    },
}
