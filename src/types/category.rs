//! Request categories and the well-known singular sections.

use serde::Serialize;

use super::attribute::Attribute;
use super::content::Content;
use super::uri::Uri;

/// Category URN of the `AccessSubject` section.
pub const ACCESS_SUBJECT_URN: &str = "urn:oasis:names:tc:xacml:1.0:subject-category:access-subject";
/// Category URN of the `Action` section.
pub const ACTION_URN: &str = "urn:oasis:names:tc:xacml:3.0:attribute-category:action";
/// Category URN of the `Resource` section.
pub const RESOURCE_URN: &str = "urn:oasis:names:tc:xacml:3.0:attribute-category:resource";
/// Category URN of the `Environment` section.
pub const ENVIRONMENT_URN: &str = "urn:oasis:names:tc:xacml:3.0:attribute-category:environment";

/// One attribute category of a request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    pub category_id: Uri,
    /// Local identifier that `RequestReference` entries may point at.
    pub xml_id: Option<String>,
    pub attributes: Vec<Attribute>,
    pub content: Option<Content>,
}
