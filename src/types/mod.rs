//! The immutable request model.
//!
//! Everything here is created exclusively by [`load_request`](crate::load_request)
//! and owned by the resulting [`Request`]; nothing is mutated after
//! construction. The model derives `Serialize` for diagnostic output, but
//! deliberately not `Deserialize`: the strict grammar in `parse/` is the only
//! way to build a request.

mod attr_value;
mod attribute;
mod category;
mod content;
mod data_type;
mod multi;
mod request;
mod uri;

pub use attr_value::{AttributeValue, XPathExpression, XPathNamespace};
pub use attribute::Attribute;
pub use category::{
    ACCESS_SUBJECT_URN, ACTION_URN, Category, ENVIRONMENT_URN, RESOURCE_URN,
};
pub use content::Content;
pub use data_type::DataTypeId;
pub use multi::RequestReference;
pub use request::{Request, RequestDefaults};
pub use uri::Uri;
