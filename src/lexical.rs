//! Lexical checks for string-carried datatypes.
//!
//! These are anchored, syntax-only patterns. Calendar-level validation (month
//! lengths, leap years) belongs to the datatype registry of the evaluation
//! stage, not the request parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RequestError;
use crate::types::DataTypeId;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{4,}-\d{2}-\d{2}(Z|[+-]\d{2}:\d{2})?$").expect("date pattern"));

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?$").expect("time pattern")
});

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d{4,}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?$")
        .expect("dateTime pattern")
});

static DAY_TIME_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?P(\d+D)?(T(\d+H)?(\d+M)?(\d+(\.\d+)?S)?)?$").expect("dayTimeDuration pattern")
});

static YEAR_MONTH_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?P(\d+Y)?(\d+M)?$").expect("yearMonthDuration pattern"));

static RFC822_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("rfc822Name pattern"));

/// Check `text` against the lexical form of `data_type`. Datatypes without a
/// pattern here accept any string.
pub(crate) fn validate(data_type: DataTypeId, text: &str) -> Result<(), RequestError> {
    let ok = match data_type {
        DataTypeId::Date => DATE.is_match(text),
        DataTypeId::Time => TIME.is_match(text),
        DataTypeId::DateTime => DATE_TIME.is_match(text),
        // The patterns alone admit designator-less "P"/"-P1DT"; a duration
        // must end in a component.
        DataTypeId::DayTimeDuration => {
            DAY_TIME_DURATION.is_match(text) && !text.ends_with(['P', 'T'])
        }
        DataTypeId::YearMonthDuration => {
            YEAR_MONTH_DURATION.is_match(text) && !text.ends_with('P')
        }
        DataTypeId::Rfc822Name => RFC822_NAME.is_match(text),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(RequestError::InvalidValue {
            data_type: data_type.to_string(),
            detail: format!("`{text}` does not match the lexical form"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        date_plain = { DataTypeId::Date, "2002-03-22" },
        date_zulu = { DataTypeId::Date, "2002-03-22Z" },
        date_offset = { DataTypeId::Date, "2002-03-22+05:00" },
        date_negative_year = { DataTypeId::Date, "-0044-03-15" },
        time_plain = { DataTypeId::Time, "08:23:47" },
        time_fractional = { DataTypeId::Time, "08:23:47.123Z" },
        date_time_plain = { DataTypeId::DateTime, "2002-03-22T08:23:47" },
        date_time_offset = { DataTypeId::DateTime, "2002-03-22T08:23:47-05:00" },
        day_time_full = { DataTypeId::DayTimeDuration, "P1DT2H3M4S" },
        day_time_seconds = { DataTypeId::DayTimeDuration, "PT0.5S" },
        day_time_negative = { DataTypeId::DayTimeDuration, "-P3D" },
        year_month_full = { DataTypeId::YearMonthDuration, "P2Y6M" },
        year_month_months = { DataTypeId::YearMonthDuration, "-P18M" },
        rfc822 = { DataTypeId::Rfc822Name, "alice@example.com" },
    )]
    fn test_accepts_valid_lexical_forms(data_type: DataTypeId, text: &str) {
        assert!(validate(data_type, text).is_ok());
    }

    #[parameterized(
        date_words = { DataTypeId::Date, "March 22, 2002" },
        date_short_year = { DataTypeId::Date, "02-03-22" },
        time_no_seconds = { DataTypeId::Time, "08:23" },
        date_time_space = { DataTypeId::DateTime, "2002-03-22 08:23:47" },
        day_time_bare_p = { DataTypeId::DayTimeDuration, "P" },
        day_time_bare_t = { DataTypeId::DayTimeDuration, "PT" },
        day_time_trailing_t = { DataTypeId::DayTimeDuration, "P1DT" },
        day_time_year_field = { DataTypeId::DayTimeDuration, "P1Y" },
        year_month_bare_p = { DataTypeId::YearMonthDuration, "P" },
        year_month_day_field = { DataTypeId::YearMonthDuration, "P3D" },
        rfc822_no_at = { DataTypeId::Rfc822Name, "alice.example.com" },
        rfc822_two_ats = { DataTypeId::Rfc822Name, "alice@b@example.com" },
    )]
    fn test_rejects_malformed_lexical_forms(data_type: DataTypeId, text: &str) {
        assert!(matches!(
            validate(data_type, text),
            Err(RequestError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unpatterned_types_accept_any_string() {
        assert!(validate(DataTypeId::X500Name, "CN=alice, O=Example").is_ok());
        assert!(validate(DataTypeId::DnsName, "host.example.com:8080").is_ok());
    }
}
