//! # Text Columns
//!
//! A library for parsing unstructured, whitespace-aligned textual output
//! (typically captured from command-line tools) into structured tabular
//! data.
//!
//! ## Features
//!
//! - **Space-column detection**: Find vertical runs of whitespace shared
//!   across all lines of a text block and infer column split positions
//! - **Column extraction**: Split ragged-length lines into per-column
//!   substrings, with optional trimming
//! - **Table construction**: Build row-major string tables, with header
//!   rows consumed into column definitions or default column names
//! - **Typed conversion**: Convert cells per column through value parsers
//!   into Bool, BigInt, Double, Date, Time, DateTime, or byte-size values
//! - **Block cleanup**: Blank-line segmentation, trailing-whitespace and
//!   boundary-line removal, common-indentation stripping
//! - **Type inference**: Detect the most specific common type over sample
//!   cells
//!
//! ## Usage Example
//!
//! ```rust
//! use text_columns::{ColumnDef, ColumnSpec, ColumnType, LineList};
//!
//! let lines = LineList::from(
//!     "Name    Age  City\n\
//!      Alice   30   Paris\n\
//!      Bob     25   Berlin\n",
//! );
//! let positions = lines.identify_space_column_positions(None)?;
//! let table = lines.create_data_table_from_columns(
//!     &positions,
//!     true,
//!     true,
//!     true,
//!     Some(vec![
//!         ColumnSpec::from("Name"),
//!         ColumnSpec::from(ColumnDef::typed("Age", ColumnType::BigInt)),
//!         ColumnSpec::from("City"),
//!     ]),
//! )?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0][1].get_bigint(), Some(30));
//! # Ok::<(), text_columns::TextColumnsError>(())
//! ```
mod error;

/// Line collection analysis and splitting
pub mod lines;

/// Built-in value-parser factories
pub mod parsers;

/// Tables, column definitions, and typed cell values
pub mod table;

pub use crate::error::TextColumnsError;
pub use crate::lines::{LineList, LinesError};
pub use crate::table::{
    ColumnDef, ColumnError, ColumnSpec, ColumnType, Table, Value, ValueError, ValueParser,
};
