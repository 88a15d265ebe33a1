//! Duplicate-preserving JSON tree.
//!
//! `serde_json::Value` folds repeated object keys into a map before user code
//! can see them, silently keeping the last occurrence. The request grammar
//! rejects duplicates at every nesting level, so the tree here keeps object
//! members as an ordered list of `(key, value)` pairs exactly as they appear
//! in the document, and [`ObjectWalker`] raises the duplicate while iterating.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::RequestError;

/// One node of the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Json {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

/// A JSON number, keeping whether the literal form was integral or fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The numeric value as a double. Every JSON number has one.
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Number::Int(int) => int as f64,
            Number::Float(float) => float,
        }
    }

    /// The value as a signed 64-bit integer, only when the literal was
    /// integral and in range.
    pub(crate) fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(int) => Some(int),
            Number::Float(_) => None,
        }
    }
}

impl Json {
    /// Node kind with article, for diagnostics.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Bool(_) => "a boolean",
            Json::Number(_) => "a number",
            Json::String(_) => "a string",
            Json::Array(_) => "an array",
            Json::Object(_) => "an object",
        }
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Json;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::Number(Number::Int(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Json, E>
            where
                E: de::Error,
            {
                // Literals above i64::MAX keep only their double form.
                Ok(match i64::try_from(value) {
                    Ok(int) => Json::Number(Number::Int(int)),
                    Err(_) => Json::Number(Number::Float(value as f64)),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::String(value))
            }

            fn visit_unit<E>(self) -> Result<Json, E>
            where
                E: de::Error,
            {
                Ok(Json::Null)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Json, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Json::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Json, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::new();
                while let Some(member) = map.next_entry::<String, Json>()? {
                    members.push(member);
                }
                Ok(Json::Object(members))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

/// Iterates the members of one object level lazily, failing on the first
/// repeated key regardless of value equality.
pub(crate) struct ObjectWalker<'a> {
    members: std::slice::Iter<'a, (String, Json)>,
    seen: HashSet<&'a str>,
}

impl<'a> ObjectWalker<'a> {
    pub(crate) fn new(members: &'a [(String, Json)]) -> Self {
        ObjectWalker {
            members: members.iter(),
            seen: HashSet::with_capacity(members.len()),
        }
    }
}

impl<'a> Iterator for ObjectWalker<'a> {
    type Item = Result<(&'a str, &'a Json), RequestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.members.next()?;
        if !self.seen.insert(key.as_str()) {
            return Some(Err(RequestError::DuplicateKey(key.clone())));
        }
        Some(Ok((key.as_str(), value)))
    }
}
