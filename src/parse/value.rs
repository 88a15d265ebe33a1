use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::RequestError;
use crate::json::{Json, ObjectWalker};
use crate::lexical;
use crate::types::{AttributeValue, DataTypeId, Uri, XPathExpression, XPathNamespace};

use super::{expect_array, expect_element_object, expect_string, mismatch, missing_key, unknown_key};

/// Infer a bag entry's type from its JSON shape.
///
/// Numbers of any literal form infer to `double`; `integer` is only reachable
/// through an explicit `DataType` declaration. The asymmetry is deliberate.
pub(crate) fn infer_value(element: &Json) -> Result<AttributeValue, RequestError> {
    match element {
        Json::Bool(flag) => Ok(AttributeValue::Boolean(*flag)),
        Json::Number(number) => Ok(AttributeValue::Double(number.as_f64())),
        Json::String(text) => Ok(AttributeValue::String(text.clone())),
        other => Err(mismatch(
            "Value",
            "a boolean, number, or string when no DataType is declared",
            other,
        )),
    }
}

/// Parse a bag entry under an explicitly declared datatype. JSON kinds map
/// strictly: a string is never accepted for a numeric or boolean type and
/// vice versa.
pub(crate) fn parse_typed_value(
    data_type: DataTypeId,
    element: &Json,
    category_id: &Uri,
) -> Result<AttributeValue, RequestError> {
    match data_type {
        DataTypeId::Boolean => match element {
            Json::Bool(flag) => Ok(AttributeValue::Boolean(*flag)),
            other => Err(mismatch("Value", "a boolean", other)),
        },
        DataTypeId::Integer => match element {
            Json::Number(number) => {
                number
                    .as_i64()
                    .map(AttributeValue::Integer)
                    .ok_or_else(|| RequestError::InvalidValue {
                        data_type: data_type.to_string(),
                        detail: "number has no integral 64-bit form".to_string(),
                    })
            }
            other => Err(mismatch("Value", "a number", other)),
        },
        DataTypeId::Double => match element {
            Json::Number(number) => Ok(AttributeValue::Double(number.as_f64())),
            other => Err(mismatch("Value", "a number", other)),
        },
        DataTypeId::String => Ok(AttributeValue::String(value_string(element)?.to_string())),
        DataTypeId::AnyUri => Ok(AttributeValue::AnyUri(value_string(element)?.to_string())),
        DataTypeId::Base64Binary => {
            let text = value_string(element)?;
            BASE64
                .decode(text)
                .map(AttributeValue::Base64Binary)
                .map_err(|error| RequestError::InvalidValue {
                    data_type: data_type.to_string(),
                    detail: error.to_string(),
                })
        }
        DataTypeId::HexBinary => {
            let text = value_string(element)?;
            hex::decode(text)
                .map(AttributeValue::HexBinary)
                .map_err(|error| RequestError::InvalidValue {
                    data_type: data_type.to_string(),
                    detail: error.to_string(),
                })
        }
        DataTypeId::Date => checked(element, data_type, AttributeValue::Date),
        DataTypeId::DateTime => checked(element, data_type, AttributeValue::DateTime),
        DataTypeId::Time => checked(element, data_type, AttributeValue::Time),
        DataTypeId::DayTimeDuration => checked(element, data_type, AttributeValue::DayTimeDuration),
        DataTypeId::YearMonthDuration => {
            checked(element, data_type, AttributeValue::YearMonthDuration)
        }
        DataTypeId::Rfc822Name => checked(element, data_type, AttributeValue::Rfc822Name),
        DataTypeId::X500Name => Ok(AttributeValue::X500Name(value_string(element)?.to_string())),
        DataTypeId::IpAddress => Ok(AttributeValue::IpAddress(
            value_string(element)?.to_string(),
        )),
        DataTypeId::DnsName => Ok(AttributeValue::DnsName(value_string(element)?.to_string())),
        DataTypeId::XpathExpression => match element {
            Json::Object(members) => build_xpath(members, category_id),
            other => Err(mismatch("Value", "an xpathExpression object", other)),
        },
    }
}

fn value_string(element: &Json) -> Result<&str, RequestError> {
    expect_string("Value", element)
}

/// String-carried datatype with a lexical pattern.
fn checked(
    element: &Json,
    data_type: DataTypeId,
    make: fn(String) -> AttributeValue,
) -> Result<AttributeValue, RequestError> {
    let text = value_string(element)?;
    lexical::validate(data_type, text)?;
    Ok(make(text.to_string()))
}

fn build_xpath(
    members: &[(String, Json)],
    category_id: &Uri,
) -> Result<AttributeValue, RequestError> {
    let mut path = None;
    let mut category = None;
    let mut namespaces = Vec::new();

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "XPath" => path = Some(expect_string(key, value)?.to_string()),
            "XPathCategory" => category = Some(Uri::parse(expect_string(key, value)?)?),
            "Namespaces" => {
                for element in expect_array(key, value)? {
                    namespaces.push(build_namespace(expect_element_object(key, element)?)?);
                }
            }
            _ => return Err(unknown_key(key, "an xpathExpression value")),
        }
    }

    let path = path.ok_or_else(|| missing_key("XPath", "an xpathExpression value"))?;

    Ok(AttributeValue::XpathExpression(XPathExpression {
        path,
        category: category.unwrap_or_else(|| category_id.clone()),
        namespaces,
    }))
}

fn build_namespace(members: &[(String, Json)]) -> Result<XPathNamespace, RequestError> {
    let mut prefix = None;
    let mut namespace = None;

    for member in ObjectWalker::new(members) {
        let (key, value) = member?;
        match key {
            "Prefix" => prefix = Some(expect_string(key, value)?.to_string()),
            "Namespace" => namespace = Some(expect_string(key, value)?.to_string()),
            _ => return Err(unknown_key(key, "a Namespaces entry")),
        }
    }

    let namespace = namespace.ok_or_else(|| missing_key("Namespace", "a Namespaces entry"))?;
    Ok(XPathNamespace { prefix, namespace })
}
