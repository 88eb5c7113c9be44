//! # Line Collection Module
//!
//! The raw input side of the crate: an ordered collection of text lines
//! with the analysis and splitting operations that turn a whitespace-aligned
//! block (typically captured command output) into columns and tables.
use thiserror::Error;

mod list;

pub use list::LineList;

/// Errors raised by line-collection analysis and table construction.
#[derive(Error, Debug)]
pub enum LinesError {
    /// Operation needs at least one non-empty line to scan
    #[error("Empty line block or all lines are empty")]
    EmptyBlock,

    /// Single-column extraction called without either bound
    #[error("Missing both extraction bounds")]
    MissingExtractBounds,

    /// Multi-column extraction called with no split positions
    #[error("No split positions specified")]
    MissingSplitPositions,

    /// Split-position inference called with a limit of zero
    #[error("Split position limit must be positive")]
    InvalidSplitLimit,

    /// Header row requested but the table has no rows
    #[error("Missing header row")]
    MissingHeaderRow,

    /// Typed table requested without any header source
    #[error("Header specification required")]
    MissingHeaderSpecification,

    /// Supplied column definitions disagree with the split-derived columns
    #[error("Number of column definitions ({defined}) does not match the number of split columns ({split})")]
    ColumnCountMismatch { defined: usize, split: usize },
}
