use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::types::{Attribute, DataTypeId, Uri};

use super::value::{infer_value, parse_typed_value};
use super::{expect_bool, expect_string, missing_key, unknown_key};

/// Build one attribute. `category_id` is the enclosing category, used as the
/// default `XPathCategory` of any xpathExpression values.
///
/// With a declared `DataType`, every bag entry parses under that one type.
/// Without one, each entry infers its type independently, so an undeclared
/// attribute may legally hold a heterogeneous bag.
pub(crate) fn build_attribute(
    members: &[(String, Json)],
    category_id: &Uri,
) -> Result<Attribute, RequestError> {
    let mut attribute_id = None;
    let mut declared = None;
    let mut raw_value = None;
    let mut include_in_result = false;

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "AttributeId" => attribute_id = Some(expect_string(key, value)?.to_string()),
            "DataType" => declared = Some(DataTypeId::resolve(expect_string(key, value)?)?),
            "Value" => raw_value = Some(value),
            "IncludeInResult" => include_in_result = expect_bool(key, value)?,
            _ => return Err(unknown_key(key, "an attribute object")),
        }
    }

    let attribute_id =
        attribute_id.ok_or_else(|| missing_key("AttributeId", "an attribute object"))?;
    let raw_value = raw_value.ok_or_else(|| missing_key("Value", "an attribute object"))?;

    // A bare scalar/object is a one-entry bag; an array contributes one entry
    // per element, in order, duplicates preserved.
    let elements: Vec<&Json> = match raw_value {
        Json::Array(items) if items.is_empty() => {
            return Err(RequestError::Empty("Value".to_string()));
        }
        Json::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        let value = match declared {
            Some(data_type) => parse_typed_value(data_type, element, category_id)?,
            None => infer_value(element)?,
        };
        values.push(value);
    }

    let data_type = declared.unwrap_or_else(|| values[0].data_type_id());

    Ok(Attribute {
        attribute_id,
        data_type,
        values,
        include_in_result,
    })
}
