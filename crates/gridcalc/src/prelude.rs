//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    evaluate_path,
    evaluate_reader,
    render_to_string,
    // Cell types
    Cell,
    CellRef,
    CellState,
    // Error types
    CsvError,
    Error,
    EvalError,
    // Evaluation types
    Evaluator,
    // Main types
    Grid,
    GridLimits,
    // I/O types
    GridReader,
    GridWriter,
    LineTerminator,
    ReadOptions,
    Result,
    WriteOptions,
};
