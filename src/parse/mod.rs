//! Builders that turn the duplicate-preserving JSON tree into request types.
//!
//! One builder per grammar production. Every object-shaped production walks
//! its members through [`ObjectWalker`](crate::json::ObjectWalker), so a
//! repeated key at any level fails before its value is looked at, and any
//! unrecognized key is a hard failure. Recognized keys are matched exactly;
//! nothing is coerced between JSON kinds.

mod attribute;
mod category;
mod multi;
mod request;
mod value;

pub(crate) use request::build_request;

use crate::error::RequestError;
use crate::json::Json;

fn mismatch(key: &str, expected: &str, found: &Json) -> RequestError {
    RequestError::TypeMismatch {
        key: key.to_string(),
        expected: expected.to_string(),
        found: found.kind().to_string(),
    }
}

fn unknown_key(key: &str, context: &str) -> RequestError {
    RequestError::UnknownKey {
        key: key.to_string(),
        context: context.to_string(),
    }
}

fn missing_key(key: &str, context: &str) -> RequestError {
    RequestError::MissingKey {
        key: key.to_string(),
        context: context.to_string(),
    }
}

fn expect_bool(key: &str, value: &Json) -> Result<bool, RequestError> {
    match value {
        Json::Bool(flag) => Ok(*flag),
        other => Err(mismatch(key, "a boolean", other)),
    }
}

fn expect_string<'a>(key: &str, value: &'a Json) -> Result<&'a str, RequestError> {
    match value {
        Json::String(text) => Ok(text),
        other => Err(mismatch(key, "a string", other)),
    }
}

fn expect_array<'a>(key: &str, value: &'a Json) -> Result<&'a [Json], RequestError> {
    match value {
        Json::Array(items) => Ok(items),
        other => Err(mismatch(key, "an array", other)),
    }
}

fn expect_object<'a>(key: &str, value: &'a Json) -> Result<&'a [(String, Json)], RequestError> {
    match value {
        Json::Object(members) => Ok(members),
        other => Err(mismatch(key, "an object", other)),
    }
}

/// Element of a key whose value must be an array of objects.
fn expect_element_object<'a>(
    key: &str,
    element: &'a Json,
) -> Result<&'a [(String, Json)], RequestError> {
    match element {
        Json::Object(members) => Ok(members),
        other => Err(mismatch(key, "an array of objects", other)),
    }
}
