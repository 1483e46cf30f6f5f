//! # gridcalc
//!
//! Load a delimited table whose cells hold literal integers or
//! single-operator formulas (`=A1+5`), evaluate every cell, and render the
//! result back to delimited text.
//!
//! The first input line names the columns; each following line starts with
//! an integer row identifier. A formula references other cells as
//! `<ColumnName><RowID>` (e.g. `B12`) and holds exactly one of `+ - * /`
//! between its two operands.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let input = ",A,B\n1,10,=A1+5\n2,=A1*2,7\n";
//! let grid = gridcalc::evaluate_reader(input.as_bytes(), &ReadOptions::default()).unwrap();
//!
//! let output = gridcalc::render_to_string(&grid, &WriteOptions::default()).unwrap();
//! assert_eq!(output, ",A,B\n1,10,15\n2,20,7\n");
//! ```

pub mod prelude;

// Re-export core types
pub use gridcalc_core::{
    Cell, CellState, Grid, GridLimits, DEFAULT_MAX_COLS, DEFAULT_MAX_ROWS,
};

// Re-export formula types
pub use gridcalc_formula::{
    parse_literal, parse_operand, CellRef, EvalError, EvalResult, Evaluator, Operand,
};

// Re-export I/O types
pub use gridcalc_csv::{
    CsvError, CsvResult, GridReader, GridWriter, LineTerminator, ReadOptions, WriteOptions,
};

use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Any error the load/evaluate/render pipeline can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Grid store error
    #[error(transparent)]
    Grid(#[from] gridcalc_core::Error),

    /// Formula evaluation error
    #[error(transparent)]
    Eval(#[from] gridcalc_formula::EvalError),

    /// Load or render error
    #[error(transparent)]
    Csv(#[from] gridcalc_csv::CsvError),
}

/// Load a grid from a file and evaluate every cell
pub fn evaluate_path<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Grid> {
    let mut grid = GridReader::read_path(path, options)?;
    Evaluator::new(&mut grid).evaluate_all()?;
    Ok(grid)
}

/// Load a grid from a reader and evaluate every cell
pub fn evaluate_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<Grid> {
    let mut grid = GridReader::read(reader, options)?;
    Evaluator::new(&mut grid).evaluate_all()?;
    Ok(grid)
}

/// Render an evaluated grid to a string
pub fn render_to_string(grid: &Grid, options: &WriteOptions) -> Result<String> {
    Ok(GridWriter::to_string(grid, options)?)
}
