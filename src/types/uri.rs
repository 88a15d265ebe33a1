//! Absolute-URI newtype used for category identifiers and XPath defaults.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use url::Url;

use crate::error::RequestError;

/// A syntactically valid absolute URI, kept in its original spelling.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// Validate `text` as an absolute URI. No normalization is applied; the
    /// value compares and renders exactly as written in the document.
    pub fn parse(text: &str) -> Result<Self, RequestError> {
        Url::parse(text)
            .map(|_| Uri(text.to_string()))
            .map_err(|_| RequestError::InvalidUri(text.to_string()))
    }

    /// Wrap a known-good constant without re-validating.
    pub(crate) fn from_static(uri: &'static str) -> Self {
        Uri(uri.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Uri {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}", self.0)
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
