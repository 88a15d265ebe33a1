use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural failure raised while turning JSON text into a [`Request`](crate::Request).
///
/// Every documented constraint violation is fatal: the first one aborts the
/// parse and no request value is produced. There is no warning tier and no
/// error aggregation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("request document is empty")]
    EmptyDocument,

    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("root must be an object with the single key `Request`: {0}")]
    BadRoot(String),

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("unknown key `{key}` in {context}")]
    UnknownKey { key: String, context: String },

    #[error("`{key}` must be {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    #[error("missing required key `{key}` in {context}")]
    MissingKey { key: String, context: String },

    #[error("`{0}` must not be empty")]
    Empty(String),

    #[error("`{0}` is not a valid absolute URI")]
    InvalidUri(String),

    #[error("unrecognized DataType `{0}`")]
    UnknownDataType(String),

    #[error("invalid {data_type} value: {detail}")]
    InvalidValue { data_type: String, detail: String },

    #[error("`Content` is neither well-formed XML nor valid Base64")]
    BadContent,

    #[error("invalid request reference: {0}")]
    BadReference(String),
}
