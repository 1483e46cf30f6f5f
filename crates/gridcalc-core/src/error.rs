//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// Row capacity exceeded
    #[error("Row capacity exceeded (limit: {0})")]
    RowCapacityExceeded(usize),

    /// Column capacity exceeded
    #[error("Column capacity exceeded (limit: {0})")]
    ColumnCapacityExceeded(usize),

    /// Column name already exists
    #[error("Column name already exists: {0}")]
    DuplicateColumn(String),

    /// Column name is empty
    #[error("Column name is empty")]
    EmptyColumnName,

    /// Row width does not match the column count
    #[error("Row has {actual} cells, expected {expected}")]
    RowWidth { expected: usize, actual: usize },

    /// Column added after rows were loaded
    #[error("Columns cannot be added once rows exist")]
    ColumnAfterRows,

    /// Cell value written twice
    #[error("Cell ({0}, {1}) already evaluated")]
    CellAlreadyEvaluated(usize, usize),

    /// Cell read before evaluation
    #[error("Cell ({0}, {1}) not evaluated")]
    NotEvaluated(usize, usize),
}
