//! Entry point: JSON text in, immutable [`Request`] out.

use tracing::debug;

use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::parse::build_request;
use crate::types::Request;

/// Parse one XACML JSON request document.
///
/// The document must be a JSON object whose only key is `Request`, mapping to
/// an object. Any structural violation anywhere in the document — unknown or
/// duplicate keys, kind mismatches, missing required fields — fails the whole
/// call; no partially built request is ever observable.
///
/// Example:
/// ```rust
/// use canopy_core::load_request;
/// let request = load_request(r#"{"Request": {"ReturnPolicyIdList": true}}"#).unwrap();
/// assert!(request.return_policy_id_list);
/// assert!(request.categories.is_empty());
/// ```
pub fn load_request(text: &str) -> Result<Request, RequestError> {
    if text.trim().is_empty() {
        return Err(RequestError::EmptyDocument);
    }

    let root: Json =
        serde_json::from_str(text).map_err(|error| RequestError::Json(error.to_string()))?;

    let members = match &root {
        Json::Object(members) => members,
        other => return Err(RequestError::BadRoot(format!("document is {}", other.kind()))),
    };

    let mut request_members = None;
    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        if key != "Request" {
            return Err(RequestError::BadRoot(format!("unexpected key `{key}`")));
        }
        match value {
            Json::Object(members) => request_members = Some(members.as_slice()),
            other => {
                return Err(RequestError::BadRoot(format!("`Request` is {}", other.kind())));
            }
        }
    }
    let request_members = request_members
        .ok_or_else(|| RequestError::BadRoot("key `Request` is missing".to_string()))?;

    debug!(event = "Load", phase = "Parsed", keys = request_members.len());

    build_request(request_members)
}
