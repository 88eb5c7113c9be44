//! Built-in value-parser factories.
//!
//! Each function returns a shareable [`ValueParser`] wrapping one of the
//! cell conversions in [`crate::table::value`]. Definitions built from
//! these can be reused across tables; cloning shares the same conversion.
use crate::table::column::ValueParser;
use crate::table::value::Value;
use std::sync::Arc;

/// Parser for boolean cells (`true`, `no`, `1`, ...).
pub fn boolean() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_boolean(value)?))
}

/// Parser for 64-bit integer cells.
pub fn bigint() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_bigint(value)?))
}

/// Parser for floating point cells.
pub fn double() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_double(value)?))
}

/// Parser for ISO date cells (`2024-01-31`).
pub fn date() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_date(value)?))
}

/// Parser for clock cells (`13:37:42`, `13:37`).
pub fn time() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_time(value)?))
}

/// Parser for datetime cells (`T`-separated, space-separated, or bare date).
pub fn datetime() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_datetime(value)?))
}

/// Parser for byte-size cells (`512`, `4K`, `1.5GiB`).
pub fn byte_size() -> ValueParser {
    Arc::new(|value| Ok(Value::parse_byte_size(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_wrap_conversions() {
        assert_eq!(bigint()("30").unwrap(), Value::BigInt(30));
        assert_eq!(boolean()("yes").unwrap(), Value::Bool(true));
        assert_eq!(double()("2.5").unwrap(), Value::Double(2.5));
        assert_eq!(byte_size()("4K").unwrap(), Value::BigInt(4096));
        assert!(date()("2024-01-31").unwrap().is_date());
        assert!(time()("13:37:42").unwrap().is_time());
        assert!(datetime()("2024-01-31T13:37:42").unwrap().is_datetime());
    }

    #[test]
    fn failures_surface_as_errors() {
        let error = bigint()("thirty").unwrap_err();
        assert_eq!(error.to_string(), "parse 'thirty' to bigint failed");
    }

    #[test]
    fn parsers_are_shareable() {
        let parser = bigint();
        let clone = Arc::clone(&parser);
        assert_eq!(parser("1").unwrap(), clone("1").unwrap());
    }
}
