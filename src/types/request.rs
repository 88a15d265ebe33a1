//! The parsed authorization request.

use serde::Serialize;

use super::category::Category;
use super::multi::RequestReference;
use super::uri::Uri;

/// An immutable XACML request, produced by [`load_request`](crate::load_request).
///
/// Categories keep insertion order: explicit `Category` array entries first,
/// then any well-known sections in document order. `multi_requests` is `Some`
/// only when at least one reference survived parsing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub return_policy_id_list: bool,
    pub combined_decision: bool,
    pub request_defaults: Option<RequestDefaults>,
    pub categories: Vec<Category>,
    pub multi_requests: Option<Vec<RequestReference>>,
}

/// Request-wide defaults, present only when the document declared them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestDefaults {
    pub xpath_version: Uri,
}
