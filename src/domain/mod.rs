pub mod error;
pub mod report;
pub mod value;

use std::fmt;

/// Payload codecs understood by the `encode` and `decode` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Byte arrays carried as base64 text.
    Bytes,
    /// Text strings carried as base64 over UTF-8.
    Text,
    /// Text strings carried as UTF-8 byte arrays.
    Utf8,
}

impl Codec {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
