//! # Table Module
//!
//! The typed output side of the crate: column definitions that label and
//! optionally type table columns, the row-major table container produced by
//! the line-splitting operations, and the typed cell values the built-in
//! parsers produce.
pub mod column;
pub mod table;
pub mod value;

pub use column::{ColumnDef, ColumnError, ColumnSpec, ColumnType, ValueParser};
pub use table::Table;
pub use value::{Value, ValueError};
