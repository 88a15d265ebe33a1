//! Category `Content` payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::error::RequestError;

/// Embedded category content: XML that parsed cleanly, or Base64-decoded
/// bytes. Which one a string becomes is decided by parse success, XML first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "data")]
pub enum Content {
    /// A well-formed XML fragment, kept verbatim.
    Xml(String),
    /// Base64-decoded binary.
    Binary(Vec<u8>),
}

impl Content {
    /// Resolve an embedded `Content` string. A string that is neither
    /// well-formed XML nor valid Base64 fails the parse.
    pub(crate) fn resolve(text: &str) -> Result<Self, RequestError> {
        if roxmltree::Document::parse(text).is_ok() {
            return Ok(Content::Xml(text.to_string()));
        }
        match BASE64.decode(text) {
            Ok(bytes) => Ok(Content::Binary(bytes)),
            Err(_) => Err(RequestError::BadContent),
        }
    }
}
