//! The attribute datatypes understood by the request parser.

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumString};

use crate::error::RequestError;

/// Identifier of an attribute datatype.
///
/// `FromStr` accepts both the JSON request profile shorthand (`"integer"`)
/// and the full datatype URI; `Display` always renders the full URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DataTypeId {
    #[strum(serialize = "string", to_string = "http://www.w3.org/2001/XMLSchema#string")]
    String,
    #[strum(serialize = "boolean", to_string = "http://www.w3.org/2001/XMLSchema#boolean")]
    Boolean,
    #[strum(serialize = "integer", to_string = "http://www.w3.org/2001/XMLSchema#integer")]
    Integer,
    #[strum(serialize = "double", to_string = "http://www.w3.org/2001/XMLSchema#double")]
    Double,
    #[strum(serialize = "time", to_string = "http://www.w3.org/2001/XMLSchema#time")]
    Time,
    #[strum(serialize = "date", to_string = "http://www.w3.org/2001/XMLSchema#date")]
    Date,
    #[strum(serialize = "dateTime", to_string = "http://www.w3.org/2001/XMLSchema#dateTime")]
    DateTime,
    #[strum(
        serialize = "dayTimeDuration",
        to_string = "http://www.w3.org/2001/XMLSchema#dayTimeDuration"
    )]
    DayTimeDuration,
    #[strum(
        serialize = "yearMonthDuration",
        to_string = "http://www.w3.org/2001/XMLSchema#yearMonthDuration"
    )]
    YearMonthDuration,
    #[strum(serialize = "anyURI", to_string = "http://www.w3.org/2001/XMLSchema#anyURI")]
    AnyUri,
    #[strum(serialize = "hexBinary", to_string = "http://www.w3.org/2001/XMLSchema#hexBinary")]
    HexBinary,
    #[strum(
        serialize = "base64Binary",
        to_string = "http://www.w3.org/2001/XMLSchema#base64Binary"
    )]
    Base64Binary,
    #[strum(
        serialize = "rfc822Name",
        to_string = "urn:oasis:names:tc:xacml:1.0:data-type:rfc822Name"
    )]
    Rfc822Name,
    #[strum(
        serialize = "x500Name",
        to_string = "urn:oasis:names:tc:xacml:1.0:data-type:x500Name"
    )]
    X500Name,
    #[strum(
        serialize = "ipAddress",
        to_string = "urn:oasis:names:tc:xacml:2.0:data-type:ipAddress"
    )]
    IpAddress,
    #[strum(
        serialize = "dnsName",
        to_string = "urn:oasis:names:tc:xacml:2.0:data-type:dnsName"
    )]
    DnsName,
    #[strum(
        serialize = "xpathExpression",
        to_string = "urn:oasis:names:tc:xacml:3.0:data-type:xpathExpression"
    )]
    XpathExpression,
}

impl DataTypeId {
    /// Resolve a `DataType` declaration, shorthand or full URI.
    pub fn resolve(text: &str) -> Result<Self, RequestError> {
        text.parse()
            .map_err(|_| RequestError::UnknownDataType(text.to_string()))
    }
}

impl Serialize for DataTypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_shorthand_alias() {
        assert_eq!(DataTypeId::resolve("integer").unwrap(), DataTypeId::Integer);
        assert_eq!(DataTypeId::resolve("anyURI").unwrap(), DataTypeId::AnyUri);
        assert_eq!(
            DataTypeId::resolve("xpathExpression").unwrap(),
            DataTypeId::XpathExpression
        );
    }

    #[test]
    fn test_resolves_full_uri() {
        assert_eq!(
            DataTypeId::resolve("http://www.w3.org/2001/XMLSchema#double").unwrap(),
            DataTypeId::Double
        );
        assert_eq!(
            DataTypeId::resolve("urn:oasis:names:tc:xacml:1.0:data-type:rfc822Name").unwrap(),
            DataTypeId::Rfc822Name
        );
    }

    #[test]
    fn test_unknown_alias_fails() {
        assert_eq!(
            DataTypeId::resolve("decimal"),
            Err(RequestError::UnknownDataType("decimal".to_string()))
        );
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        assert!(DataTypeId::resolve("DateTime").is_err());
        assert!(DataTypeId::resolve("dateTime").is_ok());
    }

    #[test]
    fn test_display_renders_full_uri() {
        assert_eq!(
            DataTypeId::Integer.to_string(),
            "http://www.w3.org/2001/XMLSchema#integer"
        );
        assert_eq!(
            DataTypeId::DnsName.to_string(),
            "urn:oasis:names:tc:xacml:2.0:data-type:dnsName"
        );
    }
}
