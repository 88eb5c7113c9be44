use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use regex::Regex;
use std::fmt::Display;
use thiserror::Error;

/// Errors produced by the built-in cell value conversions.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("parse '{0}' to boolean failed")]
    ParseBoolean(String),

    #[error("parse '{0}' to bigint failed")]
    ParseBigInt(String),

    #[error("parse '{0}' to double failed")]
    ParseDouble(String),

    #[error("parse '{0}' to date failed")]
    ParseDate(String),

    #[error("parse '{0}' to time failed")]
    ParseTime(String),

    #[error("parse '{0}' to datetime failed")]
    ParseDateTime(String),

    #[error("parse '{0}' to byte size failed")]
    ParseByteSize(String),
}

/// A typed cell value produced by typed-table construction.
///
/// Cells without a value parser stay `Varchar`; the other variants are
/// produced by the built-in parsers or by caller-supplied ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Variable-length strings
    Varchar(String),
    /// Boolean values (true/false)
    Bool(bool),
    /// 64-bit signed integers
    BigInt(i64),
    /// Double-precision floating point numbers
    Double(f64),
    /// Date without time component
    Date(NaiveDate),
    /// Time without date component
    Time(NaiveTime),
    /// Date and time
    DateTime(NaiveDateTime),
}

impl Value {
    /// Converts a cell string to a boolean.
    /// Accepts the spellings command-line tools commonly print.
    pub fn parse_boolean(value: &str) -> Result<Value, ValueError> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "off" | "0" => Ok(Value::Bool(false)),
            _ => Err(ValueError::ParseBoolean(value.to_owned())),
        }
    }

    /// Converts a cell string to a 64-bit integer.
    pub fn parse_bigint(value: &str) -> Result<Value, ValueError> {
        value
            .parse::<i64>()
            .map(Value::BigInt)
            .map_err(|_| ValueError::ParseBigInt(value.to_owned()))
    }

    /// Converts a cell string to a double-precision floating point number.
    pub fn parse_double(value: &str) -> Result<Value, ValueError> {
        value
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| ValueError::ParseDouble(value.to_owned()))
    }

    /// Converts an ISO date cell string (`2024-01-31`) to a date.
    pub fn parse_date(value: &str) -> Result<Value, ValueError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|_| ValueError::ParseDate(value.to_owned()))
    }

    /// Converts a clock cell string (`13:37:42`, `13:37`, fractional seconds
    /// allowed) to a time.
    pub fn parse_time(value: &str) -> Result<Value, ValueError> {
        NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
            .map(Value::Time)
            .map_err(|_| ValueError::ParseTime(value.to_owned()))
    }

    /// Converts a datetime cell string to a datetime.
    /// Accepts `T`-separated and space-separated forms; a bare date gets
    /// midnight appended.
    pub fn parse_datetime(value: &str) -> Result<Value, ValueError> {
        let datetime = if value.contains('T') {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        } else if value.contains(' ') {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        } else {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| date.and_hms_opt(0, 0, 0).expect("Append 00:00:00"))
        };
        datetime
            .map(Value::DateTime)
            .map_err(|_| ValueError::ParseDateTime(value.to_owned()))
    }

    /// Converts a byte-size cell string to an integer byte count.
    ///
    /// Accepts plain counts and binary-scaled suffixes the way size-printing
    /// tools write them: `512`, `512B`, `4K`, `23M`, `1.5GiB`, `15Gi`.
    pub fn parse_byte_size(value: &str) -> Result<Value, ValueError> {
        let pattern =
            Regex::new(r"^(\d+(?:\.\d+)?)\s*([KMGTPE]?)(?:IB?|B)?$").expect("Hardcode regex pattern");
        let normalized = value.trim().to_ascii_uppercase();
        let captures = pattern
            .captures(normalized.as_str())
            .ok_or_else(|| ValueError::ParseByteSize(value.to_owned()))?;
        let amount = captures
            .get(1)
            .map(|matcher| matcher.as_str())
            .and_then(|digits| digits.parse::<f64>().ok())
            .ok_or_else(|| ValueError::ParseByteSize(value.to_owned()))?;
        let exponent = match captures.get(2).map(|matcher| matcher.as_str()) {
            Some("K") => 1,
            Some("M") => 2,
            Some("G") => 3,
            Some("T") => 4,
            Some("P") => 5,
            Some("E") => 6,
            _ => 0,
        };
        Ok(Value::BigInt((amount * 1024f64.powi(exponent)).round() as i64))
    }

    /// Returns true if this value holds a string.
    pub fn is_varchar(&self) -> bool {
        matches!(self, Value::Varchar(_))
    }

    /// Extracts the string slice if this value holds one.
    pub fn get_varchar(&self) -> Option<&str> {
        match self {
            Value::Varchar(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns true if this value holds a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Extracts the boolean if this value holds one.
    pub fn get_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this value holds an integer.
    pub fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// Extracts the integer if this value holds one.
    pub fn get_bigint(&self) -> Option<i64> {
        match self {
            Value::BigInt(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this value holds a number (integer or floating point).
    pub fn is_double(&self) -> bool {
        matches!(self, Value::BigInt(_) | Value::Double(_))
    }

    /// Extracts the numeric value as a double if this value holds a number.
    pub fn get_double(&self) -> Option<f64> {
        match self {
            Value::BigInt(value) => Some(*value as f64),
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this value holds a date.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Extracts the date if this value holds one.
    pub fn get_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this value holds a time.
    pub fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    /// Extracts the time if this value holds one.
    pub fn get_time(&self) -> Option<NaiveTime> {
        match self {
            Value::Time(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this value holds a datetime.
    pub fn is_datetime(&self) -> bool {
        matches!(self, Value::DateTime(_))
    }

    /// Extracts the datetime if this value holds one.
    pub fn get_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Varchar(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::BigInt(value) => write!(f, "{}", value),
            Value::Double(value) => write!(f, "{}", value),
            Value::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Value::Time(value) => write!(f, "{}", value.format("%H:%M:%S")),
            Value::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_spellings() {
        assert_eq!(Value::parse_boolean("true").unwrap(), Value::Bool(true));
        assert_eq!(Value::parse_boolean("YES").unwrap(), Value::Bool(true));
        assert_eq!(Value::parse_boolean("1").unwrap(), Value::Bool(true));
        assert_eq!(Value::parse_boolean("off").unwrap(), Value::Bool(false));
        assert_eq!(Value::parse_boolean("0").unwrap(), Value::Bool(false));
        assert!(Value::parse_boolean("maybe").is_err());
    }

    #[test]
    fn bigint_and_double() {
        assert_eq!(Value::parse_bigint("-42").unwrap(), Value::BigInt(-42));
        assert!(Value::parse_bigint("2.5").is_err());
        assert_eq!(Value::parse_double("2.5").unwrap(), Value::Double(2.5));
        assert!(Value::parse_double("two").is_err());
    }

    #[test]
    fn date_time_datetime() {
        assert_eq!(
            Value::parse_date("2024-01-31").unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        assert!(Value::parse_date("31.01.2024").is_err());

        assert_eq!(
            Value::parse_time("13:37:42").unwrap(),
            Value::Time(NaiveTime::from_hms_opt(13, 37, 42).unwrap())
        );
        assert_eq!(
            Value::parse_time("13:37").unwrap(),
            Value::Time(NaiveTime::from_hms_opt(13, 37, 0).unwrap())
        );

        let expected = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(13, 37, 42)
            .unwrap();
        assert_eq!(
            Value::parse_datetime("2024-01-31T13:37:42").unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            Value::parse_datetime("2024-01-31 13:37:42").unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            Value::parse_datetime("2024-01-31").unwrap(),
            Value::DateTime(expected.date().and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(Value::parse_byte_size("512").unwrap(), Value::BigInt(512));
        assert_eq!(Value::parse_byte_size("512B").unwrap(), Value::BigInt(512));
        assert_eq!(Value::parse_byte_size("4K").unwrap(), Value::BigInt(4096));
        assert_eq!(Value::parse_byte_size("1.5K").unwrap(), Value::BigInt(1536));
        assert_eq!(Value::parse_byte_size("15Gi").unwrap(), Value::BigInt(15 * 1024 * 1024 * 1024));
        assert_eq!(Value::parse_byte_size("2MiB").unwrap(), Value::BigInt(2 * 1024 * 1024));
        assert_eq!(Value::parse_byte_size("3 kb").unwrap(), Value::BigInt(3072));
        assert!(Value::parse_byte_size("lots").is_err());
        assert!(Value::parse_byte_size("4X").is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::Varchar("Paris".to_owned()).to_string(), "Paris");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::BigInt(30).to_string(), "30");
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()).to_string(),
            "2024-01-31"
        );
        assert_eq!(
            Value::Time(NaiveTime::from_hms_opt(13, 37, 42).unwrap()).to_string(),
            "13:37:42"
        );
    }

    #[test]
    fn accessors() {
        let value = Value::BigInt(30);
        assert!(value.is_bigint());
        assert!(value.is_double());
        assert_eq!(value.get_bigint(), Some(30));
        assert_eq!(value.get_double(), Some(30.0));
        assert_eq!(value.get_varchar(), None);

        let value = Value::Varchar("x".to_owned());
        assert!(value.is_varchar());
        assert_eq!(value.get_varchar(), Some("x"));
        assert_eq!(value.get_bigint(), None);

        let value = Value::Bool(false);
        assert!(value.is_bool());
        assert_eq!(value.get_bool(), Some(false));

        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let time = NaiveTime::from_hms_opt(13, 37, 42).unwrap();
        assert_eq!(Value::Date(date).get_date(), Some(date));
        assert_eq!(Value::Time(time).get_time(), Some(time));
        assert_eq!(
            Value::DateTime(date.and_time(time)).get_datetime(),
            Some(date.and_time(time))
        );
    }
}
