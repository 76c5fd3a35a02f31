//! Scalar element types a value sequence may hold -- integers of several widths and ISO-8601 date-times.

use std::fmt::Debug;
use chrono::{DateTime, NaiveDateTime, Timelike};
use crate::errors::BenchError;


/// A value that can be loaded from / saved to a line of a data file and compared by its natural order
pub trait ScalarValue: Ord + Clone + Debug {
    /// name used in error messages and reports
    const TYPE_NAME: &'static str;
    /// describes the accepted textual format, for usage messages
    const FORMAT_HINT: &'static str;

    /// parses an already trimmed piece of text, returning the reason on failure
    fn parse_scalar(text: &str) -> Result<Self, String>;

    /// the textual form written to data files -- accepted back by [Self::parse_scalar()]
    fn render(&self) -> String;
}

/// Parses the user-given value to search for -- surrounding whitespace is ignored
pub fn parse_search_value<T: ScalarValue>(text: &str) -> Result<T, BenchError> {
    T::parse_scalar(text.trim())
        .map_err(|reason| BenchError::InvalidSearchValue {
            value:     text.to_string(),
            type_name: T::TYPE_NAME,
            reason,
        })
}

macro_rules! integer_scalar {
    ($type:ty, $type_name:literal) => {
        impl ScalarValue for $type {
            const TYPE_NAME: &'static str = $type_name;
            const FORMAT_HINT: &'static str = concat!("an integer in the range of `", stringify!($type), "`");

            fn parse_scalar(text: &str) -> Result<Self, String> {
                text.parse::<$type>()
                    .map_err(|err| format!("{err} -- expected an integer between {} and {}", <$type>::MIN, <$type>::MAX))
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

integer_scalar!(i16, "short");
integer_scalar!(i32, "int");
integer_scalar!(i64, "long");

/// formats without a zone; with or without fractional seconds
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl ScalarValue for NaiveDateTime {
    const TYPE_NAME: &'static str = "date-time";
    const FORMAT_HINT: &'static str = "an ISO-8601 date-time, like 2024-03-16T00:12:38Z";

    /// Accepts ISO-8601 date-times with an offset (`Z`, `+02:00`) -- converted to UTC -- or without any zone
    fn parse_scalar(text: &str) -> Result<Self, String> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
            return Ok(zoned.naive_utc())
        }
        DATE_TIME_FORMATS.iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .ok_or_else(|| format!("expected {}", Self::FORMAT_HINT))
    }

    fn render(&self) -> String {
        if self.nanosecond() == 0 {
            self.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
        }
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [values](super) module

    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn integers() {
        assert_eq!(i16::parse_scalar("420"),    Ok(420));
        assert_eq!(i16::parse_scalar("-32768"), Ok(i16::MIN));
        assert!(i16::parse_scalar("32768").unwrap_err().contains("between -32768 and 32767"));
        assert!(i32::parse_scalar("4.2").is_err());
        assert_eq!(i64::parse_scalar("9000000000"), Ok(9_000_000_000));
        assert_eq!((-17i16).render(), "-17");
    }

    #[test]
    fn date_times() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap().and_hms_opt(0, 12, 38).unwrap();
        assert_eq!(NaiveDateTime::parse_scalar("2024-03-16T00:12:38Z"),      Ok(expected));
        assert_eq!(NaiveDateTime::parse_scalar("2024-03-16T02:12:38+02:00"), Ok(expected), "offsets must be converted to UTC");
        assert_eq!(NaiveDateTime::parse_scalar("2024-03-16T00:12:38"),       Ok(expected));
        assert_eq!(expected.render(), "2024-03-16T00:12:38");
        assert!(NaiveDateTime::parse_scalar("16/03/2024").is_err());
    }

    #[test]
    fn date_times_with_fractions_survive_rendering() {
        let value = NaiveDateTime::parse_scalar("2024-03-16T00:12:38.250").unwrap();
        assert_eq!(value.nanosecond(), 250_000_000);
        assert_eq!(NaiveDateTime::parse_scalar(&value.render()), Ok(value));
    }

    #[test]
    fn search_values() {
        assert_eq!(parse_search_value::<i32>(" 420 ").unwrap(), 420);
        let error = parse_search_value::<i16>("forty-two").unwrap_err();
        assert!(matches!(&error, BenchError::InvalidSearchValue { type_name: "short", .. }), "{error:?}");
        assert!(error.to_string().starts_with("invalid short search value 'forty-two'"), "{error}");
    }
}
