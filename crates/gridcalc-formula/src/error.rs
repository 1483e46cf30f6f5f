//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur during formula evaluation
#[derive(Debug, Error)]
pub enum EvalError {
    /// Operand is neither a valid integer literal nor a cell reference
    #[error("Invalid operand: '{0}'")]
    InvalidOperand(String),

    /// Referenced column name does not exist
    #[error("Column '{0}' not found")]
    UnknownColumn(String),

    /// Referenced row identifier does not exist
    #[error("Row id {0} not found")]
    UnknownRow(i64),

    /// Formula contains no operator character
    #[error("No operator in expression: '{0}'")]
    MissingOperator(String),

    /// Operator character is not one of `+ - * /`
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(char),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// An error with the raw text of the cell it surfaced in
    #[error("{source} (in cell '{cell}')")]
    Cell {
        /// Raw text of the originating cell
        cell: String,
        #[source]
        source: Box<EvalError>,
    },

    /// Grid store error
    #[error(transparent)]
    Grid(#[from] gridcalc_core::Error),
}

impl EvalError {
    /// Attach the originating cell's raw text, unless already attached
    pub(crate) fn in_cell(self, raw: &str) -> EvalError {
        match self {
            err @ EvalError::Cell { .. } => err,
            err => EvalError::Cell {
                cell: raw.to_string(),
                source: Box::new(err),
            },
        }
    }

    /// The underlying error, looking through cell context
    pub fn root(&self) -> &EvalError {
        match self {
            EvalError::Cell { source, .. } => source.root(),
            err => err,
        }
    }
}
