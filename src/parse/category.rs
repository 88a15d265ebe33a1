use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::types::{Category, Content, Uri};

use super::attribute::build_attribute;
use super::{expect_array, expect_element_object, expect_string, missing_key, unknown_key};

/// Build a `Category` array entry. `CategoryId` is required here.
pub(crate) fn build_explicit_category(
    members: &[(String, Json)],
) -> Result<Category, RequestError> {
    build_category(members, None)
}

/// Build one of the well-known singular sections. The category URN is fixed
/// by the section name, and `CategoryId` is not a legal key.
pub(crate) fn build_well_known_category(
    members: &[(String, Json)],
    urn: &'static str,
) -> Result<Category, RequestError> {
    build_category(members, Some(urn))
}

fn build_category(
    members: &[(String, Json)],
    fixed_urn: Option<&'static str>,
) -> Result<Category, RequestError> {
    let mut category_id = fixed_urn.map(Uri::from_static);
    let mut xml_id = None;
    let mut content = None;
    // `CategoryId` may appear after `Attribute` in document order, and the
    // category id is the default XPathCategory of xpathExpression values, so
    // attribute objects are built only after the walk completes.
    let mut attribute_entries: Vec<&[(String, Json)]> = Vec::new();

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "CategoryId" if fixed_urn.is_none() => {
                category_id = Some(Uri::parse(expect_string(key, value)?)?);
            }
            "Id" => xml_id = Some(expect_string(key, value)?.to_string()),
            "Attribute" => {
                for element in expect_array(key, value)? {
                    attribute_entries.push(expect_element_object(key, element)?);
                }
            }
            "Content" => content = Some(Content::resolve(expect_string(key, value)?)?),
            _ => return Err(unknown_key(key, "a category object")),
        }
    }

    let category_id =
        category_id.ok_or_else(|| missing_key("CategoryId", "a Category entry"))?;

    let attributes = attribute_entries
        .into_iter()
        .map(|members| build_attribute(members, &category_id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category {
        category_id,
        xml_id,
        attributes,
        content,
    })
}
