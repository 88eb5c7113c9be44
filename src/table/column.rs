use crate::parsers;
use crate::table::value::Value;
use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to column type parsing.
#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("Invalid column type '{0}'")]
    TypeError(String),
}

/// A per-column cell conversion function.
///
/// Takes the raw cell string and produces a typed value; failures propagate
/// unmodified to the caller of typed-table construction.
pub type ValueParser = Arc<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// Supported column data types for the built-in value parsers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    /// Variable-length strings (no conversion)
    Varchar,
    /// Boolean values (true/false)
    Boolean,
    /// 64-bit signed integers
    BigInt,
    /// Double-precision floating point numbers
    Double,
    /// Date without time component
    Date,
    /// Time without date component
    Time,
    /// Date and time
    DateTime,
    /// Byte counts with optional binary-scaled suffix
    ByteSize,
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Varchar => "varchar",
            ColumnType::Boolean => "boolean",
            ColumnType::BigInt => "bigint",
            ColumnType::Double => "double",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "timestamp",
            ColumnType::ByteSize => "bytesize",
        }
    }

    /// Parses a column type from a string representation.
    /// Supports various aliases for each type.
    pub fn parse(name: &str) -> Result<Self, ColumnError> {
        match name.to_ascii_uppercase().as_str() {
            "TEXT" | "STRING" | "VARCHAR" => Ok(Self::Varchar),
            "BOOL" | "BOOLEAN" => Ok(Self::Boolean),
            "INT" | "BIGINT" | "INTEGER" => Ok(Self::BigInt),
            "FLOAT" | "DOUBLE" | "DECIMAL" | "NUMERIC" => Ok(Self::Double),
            "DATE" => Ok(Self::Date),
            "TIME" => Ok(Self::Time),
            "DATETIME" | "TIMESTAMP" => Ok(Self::DateTime),
            "SIZE" | "BYTESIZE" => Ok(Self::ByteSize),
            _ => Err(ColumnError::TypeError(name.to_string())),
        }
    }

    /// Returns the built-in value parser for this column type.
    /// `Varchar` has no parser; its cells stay strings.
    pub fn value_parser(&self) -> Option<ValueParser> {
        match self {
            ColumnType::Varchar => None,
            ColumnType::Boolean => Some(parsers::boolean()),
            ColumnType::BigInt => Some(parsers::bigint()),
            ColumnType::Double => Some(parsers::double()),
            ColumnType::Date => Some(parsers::date()),
            ColumnType::Time => Some(parsers::time()),
            ColumnType::DateTime => Some(parsers::datetime()),
            ColumnType::ByteSize => Some(parsers::byte_size()),
        }
    }

    /// Detects the most specific common type over a sample of cell strings.
    /// Blank samples are ignored; inconsistent or empty samples fall back to
    /// VARCHAR.
    pub fn detect<S: AsRef<str>>(samples: &[S]) -> ColumnType {
        let samples: Vec<&str> = samples
            .iter()
            .map(|sample| sample.as_ref().trim())
            .filter(|sample| !sample.is_empty())
            .collect();
        if samples.is_empty() {
            ColumnType::Varchar
        } else if samples.iter().all(|s| Value::parse_boolean(s).is_ok()) {
            ColumnType::Boolean
        } else if samples.iter().all(|s| Value::parse_bigint(s).is_ok()) {
            ColumnType::BigInt
        } else if samples.iter().all(|s| Value::parse_double(s).is_ok()) {
            ColumnType::Double
        } else if samples.iter().all(|s| Value::parse_time(s).is_ok()) {
            ColumnType::Time
        } else if samples.iter().all(|s| Value::parse_date(s).is_ok()) {
            ColumnType::Date
        } else if samples.iter().all(|s| Value::parse_datetime(s).is_ok()) {
            ColumnType::DateTime
        } else {
            ColumnType::Varchar
        }
    }
}

/// Labels a table column and optionally types its cells.
///
/// The parser is shared by reference; cloning a definition reuses the same
/// conversion function.
#[derive(Clone)]
pub struct ColumnDef {
    /// Column name (from a header row, an explicit label, or generated)
    pub name: String,
    /// Cell conversion applied during typed-table construction
    pub value_parser: Option<ValueParser>,
}

impl ColumnDef {
    /// Creates a definition with no value parser; cells stay strings.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            value_parser: None,
        }
    }

    /// Creates a definition with an explicit value parser.
    pub fn with_parser<S: Into<String>>(name: S, value_parser: ValueParser) -> Self {
        Self {
            name: name.into(),
            value_parser: Some(value_parser),
        }
    }

    /// Creates a definition using the built-in parser for a column type.
    pub fn typed<S: Into<String>>(name: S, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            value_parser: kind.value_parser(),
        }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("name", &self.name)
            .field("value_parser", &self.value_parser.as_ref().map(|_| "fn"))
            .finish()
    }
}

/// Column specification accepted by typed-table construction: either a bare
/// header label or a full definition.
#[derive(Clone, Debug)]
pub enum ColumnSpec {
    /// A header label; the column keeps string cells
    Name(String),
    /// A full column definition, used as-is
    Def(ColumnDef),
}

impl ColumnSpec {
    /// Resolves the specification into a column definition.
    pub fn into_def(self) -> ColumnDef {
        match self {
            ColumnSpec::Name(name) => ColumnDef::new(name),
            ColumnSpec::Def(def) => def,
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::Name(name.to_owned())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::Name(name)
    }
}

impl From<ColumnDef> for ColumnSpec {
    fn from(def: ColumnDef) -> Self {
        ColumnSpec::Def(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_aliases() {
        assert_eq!(ColumnType::parse("int").unwrap(), ColumnType::BigInt);
        assert_eq!(ColumnType::parse("INTEGER").unwrap(), ColumnType::BigInt);
        assert_eq!(ColumnType::parse("string").unwrap(), ColumnType::Varchar);
        assert_eq!(ColumnType::parse("timestamp").unwrap(), ColumnType::DateTime);
        assert_eq!(ColumnType::parse("size").unwrap(), ColumnType::ByteSize);
        assert!(ColumnType::parse("uuid").is_err());
    }

    #[test]
    fn type_names_round_trip() {
        for kind in [
            ColumnType::Varchar,
            ColumnType::Boolean,
            ColumnType::BigInt,
            ColumnType::Double,
            ColumnType::Date,
            ColumnType::Time,
            ColumnType::DateTime,
            ColumnType::ByteSize,
        ] {
            assert_eq!(ColumnType::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn detect_prefers_most_specific() {
        assert_eq!(ColumnType::detect(&["true", "no", "1"]), ColumnType::Boolean);
        assert_eq!(ColumnType::detect(&["1", "25", "-3"]), ColumnType::BigInt);
        assert_eq!(ColumnType::detect(&["1", "2.5"]), ColumnType::Double);
        assert_eq!(ColumnType::detect(&["12:30:00", "01:02:03"]), ColumnType::Time);
        assert_eq!(
            ColumnType::detect(&["2024-01-31", "2023-12-01"]),
            ColumnType::Date
        );
        assert_eq!(
            ColumnType::detect(&["2024-01-31 10:00:00", "2024-01-31"]),
            ColumnType::DateTime
        );
        assert_eq!(ColumnType::detect(&["25", "Berlin"]), ColumnType::Varchar);
    }

    #[test]
    fn detect_ignores_blanks() {
        assert_eq!(ColumnType::detect(&["", " 30 ", ""]), ColumnType::BigInt);
        assert_eq!(ColumnType::detect::<&str>(&[]), ColumnType::Varchar);
        assert_eq!(ColumnType::detect(&["", "  "]), ColumnType::Varchar);
    }

    #[test]
    fn typed_definitions_carry_parsers() {
        let def = ColumnDef::typed("Age", ColumnType::BigInt);
        let parser = def.value_parser.expect("bigint parser");
        assert_eq!(parser("30").unwrap(), Value::BigInt(30));

        let def = ColumnDef::typed("Name", ColumnType::Varchar);
        assert!(def.value_parser.is_none());
    }

    #[test]
    fn custom_parsers_are_first_class() {
        let def = ColumnDef::with_parser(
            "Percent",
            Arc::new(|value: &str| {
                let digits = value.trim_end_matches('%');
                Ok(Value::parse_bigint(digits)?)
            }),
        );
        let parser = def.value_parser.expect("custom parser");
        assert_eq!(parser("24%").unwrap(), Value::BigInt(24));
        assert!(parser("n/a").is_err());
    }

    #[test]
    fn specs_resolve_to_definitions() {
        let def = ColumnSpec::from("City").into_def();
        assert_eq!(def.name, "City");
        assert!(def.value_parser.is_none());

        let def = ColumnSpec::from(ColumnDef::typed("Age", ColumnType::BigInt)).into_def();
        assert_eq!(def.name, "Age");
        assert!(def.value_parser.is_some());
    }
}
