use tracing::debug;

use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::types::{
    ACCESS_SUBJECT_URN, ACTION_URN, Category, ENVIRONMENT_URN, RESOURCE_URN, Request,
    RequestDefaults, Uri,
};

use super::category::{build_explicit_category, build_well_known_category};
use super::multi::build_multi_requests;
use super::{
    expect_array, expect_bool, expect_element_object, expect_object, expect_string, unknown_key,
};

/// Build the full request from the members of the root `Request` object.
///
/// Explicit `Category` entries come first in the category list, in array
/// order, followed by the well-known sections in document order.
pub(crate) fn build_request(members: &[(String, Json)]) -> Result<Request, RequestError> {
    let mut return_policy_id_list = false;
    let mut combined_decision = false;
    let mut request_defaults = None;
    let mut explicit: Vec<Category> = Vec::new();
    let mut well_known: Vec<Category> = Vec::new();
    let mut multi_requests = None;

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "ReturnPolicyIdList" => return_policy_id_list = expect_bool(key, value)?,
            "CombinedDecision" => combined_decision = expect_bool(key, value)?,
            "XPathVersion" => {
                let xpath_version = Uri::parse(expect_string(key, value)?)?;
                request_defaults = Some(RequestDefaults { xpath_version });
            }
            "Category" => {
                for element in expect_array(key, value)? {
                    explicit.push(build_explicit_category(expect_element_object(key, element)?)?);
                }
            }
            "AccessSubject" => well_known.push(section(key, value, ACCESS_SUBJECT_URN)?),
            "Action" => well_known.push(section(key, value, ACTION_URN)?),
            "Resource" => well_known.push(section(key, value, RESOURCE_URN)?),
            "Environment" => well_known.push(section(key, value, ENVIRONMENT_URN)?),
            "MultiRequests" => {
                multi_requests = build_multi_requests(expect_object(key, value)?)?;
            }
            _ => return Err(unknown_key(key, "the Request object")),
        }
    }

    let mut categories = explicit;
    categories.append(&mut well_known);

    debug!(
        event = "Request",
        phase = "Assembled",
        categories = categories.len(),
        references = multi_requests.as_ref().map_or(0, Vec::len)
    );

    Ok(Request {
        return_policy_id_list,
        combined_decision,
        request_defaults,
        categories,
        multi_requests,
    })
}

fn section(key: &str, value: &Json, urn: &'static str) -> Result<Category, RequestError> {
    build_well_known_category(expect_object(key, value)?, urn)
}
