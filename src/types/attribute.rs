//! A named attribute and its value bag.

use serde::Serialize;

use super::attr_value::AttributeValue;
use super::data_type::DataTypeId;

/// One attribute: an identifier plus an ordered, duplicate-preserving bag of
/// typed values. The bag is never empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attribute {
    pub attribute_id: String,
    /// Declared datatype, or the first bag entry's inferred type when the
    /// document omitted `DataType`.
    pub data_type: DataTypeId,
    pub values: Vec<AttributeValue>,
    pub include_in_result: bool,
}
