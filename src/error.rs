use thiserror::Error;

/// Main error type for the text-columns crate.
/// Aggregates errors from the line-collection and table modules together
/// with failures raised by caller-supplied value parsers.
#[derive(Error, Debug)]
pub enum TextColumnsError {
    /// Value-parser failure, propagated unmodified
    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    // Line collection module errors
    #[error("{0}")]
    LinesError(#[from] crate::lines::LinesError),

    // Table module errors
    #[error("{0}")]
    ColumnError(#[from] crate::table::column::ColumnError),

    #[error("{0}")]
    ValueError(#[from] crate::table::value::ValueError),
}
