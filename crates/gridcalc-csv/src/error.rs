//! Loader/renderer error types

use thiserror::Error;

/// Result type for loader/renderer operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading or rendering delimited text
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input contains no records at all
    #[error("Input is empty")]
    EmptyInput,

    /// Header line names no columns
    #[error("Header line names no columns")]
    NoColumns,

    /// Row identifier field is not an integer
    #[error("Invalid row id '{text}' on line {line}")]
    InvalidRowId { line: u64, text: String },

    /// Rendered output is not valid UTF-8
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Grid store error
    #[error(transparent)]
    Grid(#[from] gridcalc_core::Error),
}
