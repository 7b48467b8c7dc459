//! Codepage transcoding for proto files
//!
//! Proto files predate UTF-8 tooling. Name, description and icon lists are
//! stored in a Western single-byte codepage, everything else in the Korean
//! multi-byte codepage used by the original game tools.

use bytes::Bytes;
use encoding_rs::{Encoding, EUC_KR, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Byte encoding of a proto file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codepage {
    /// windows-1252
    Western,
    /// EUC-KR (decoded with the CP949 extensions)
    Korean,
}

impl Codepage {
    pub fn encoding(&self) -> &'static Encoding {
        match self {
            Codepage::Western => WINDOWS_1252,
            Codepage::Korean => EUC_KR,
        }
    }

    /// Decode file bytes to text
    ///
    /// Malformed sequences are replaced with U+FFFD instead of failing. A
    /// leading BOM overrides the codepage.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, used, had_errors) = self.encoding().decode(bytes);
        if had_errors {
            debug!("Malformed {} sequences replaced while decoding", used.name());
        }
        text.into_owned()
    }

    /// Encode text to file bytes
    ///
    /// Characters the codepage cannot represent are written as numeric
    /// character references.
    pub fn encode(&self, text: &str) -> Bytes {
        let (bytes, used, had_unmappable) = self.encoding().encode(text);
        if had_unmappable {
            debug!("Unmappable characters while encoding to {}", used.name());
        }
        Bytes::copy_from_slice(&bytes)
    }
}
