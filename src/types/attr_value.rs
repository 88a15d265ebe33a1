//! Attribute values: the typed bag entries of a request attribute.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::Serialize;

use super::data_type::DataTypeId;
use super::uri::Uri;

/// One typed entry in an attribute bag.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "value")]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    AnyUri(String),
    Base64Binary(Vec<u8>),
    HexBinary(Vec<u8>),
    Date(String),
    DateTime(String),
    Time(String),
    DayTimeDuration(String),
    YearMonthDuration(String),
    Rfc822Name(String),
    X500Name(String),
    IpAddress(String),
    DnsName(String),
    XpathExpression(XPathExpression),
}

impl AttributeValue {
    /// The datatype this value was parsed under.
    pub fn data_type_id(&self) -> DataTypeId {
        match self {
            AttributeValue::Boolean(_) => DataTypeId::Boolean,
            AttributeValue::Integer(_) => DataTypeId::Integer,
            AttributeValue::Double(_) => DataTypeId::Double,
            AttributeValue::String(_) => DataTypeId::String,
            AttributeValue::AnyUri(_) => DataTypeId::AnyUri,
            AttributeValue::Base64Binary(_) => DataTypeId::Base64Binary,
            AttributeValue::HexBinary(_) => DataTypeId::HexBinary,
            AttributeValue::Date(_) => DataTypeId::Date,
            AttributeValue::DateTime(_) => DataTypeId::DateTime,
            AttributeValue::Time(_) => DataTypeId::Time,
            AttributeValue::DayTimeDuration(_) => DataTypeId::DayTimeDuration,
            AttributeValue::YearMonthDuration(_) => DataTypeId::YearMonthDuration,
            AttributeValue::Rfc822Name(_) => DataTypeId::Rfc822Name,
            AttributeValue::X500Name(_) => DataTypeId::X500Name,
            AttributeValue::IpAddress(_) => DataTypeId::IpAddress,
            AttributeValue::DnsName(_) => DataTypeId::DnsName,
            AttributeValue::XpathExpression(_) => DataTypeId::XpathExpression,
        }
    }
}

/// An `xpathExpression` value: the XPath itself, the category whose `Content`
/// it selects into, and any namespace bindings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct XPathExpression {
    pub path: String,
    pub category: Uri,
    pub namespaces: Vec<XPathNamespace>,
}

/// One namespace binding of an `xpathExpression`. A missing prefix binds the
/// default namespace.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct XPathNamespace {
    pub prefix: Option<String>,
    pub namespace: String,
}

impl Display for XPathExpression {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        if self.namespaces.is_empty() {
            return write!(formatter, "{} ({})", self.path, self.category);
        }
        let bindings = self
            .namespaces
            .iter()
            .map(|binding| match &binding.prefix {
                Some(prefix) => format!("xmlns:{}={}", prefix, binding.namespace),
                None => format!("xmlns={}", binding.namespace),
            })
            .join(" ");
        write!(formatter, "{} ({}; {})", self.path, self.category, bindings)
    }
}
