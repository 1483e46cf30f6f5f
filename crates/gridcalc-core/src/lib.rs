//! # gridcalc-core
//!
//! Core data structures for the gridcalc tabular calculator.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`Grid`] - The column/row store holding raw cell text and evaluated values
//! - [`Cell`] and [`CellState`] - Per-cell raw text and evaluation state
//! - [`GridLimits`] - Configurable capacity bounds
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::Grid;
//!
//! let mut grid = Grid::new();
//! grid.push_column("A").unwrap();
//! grid.push_column("B").unwrap();
//! grid.push_row(1, vec!["10".into(), "=A1+5".into()]).unwrap();
//!
//! assert_eq!(grid.column_index("B"), Some(1));
//! assert_eq!(grid.row_index(1), Some(0));
//! assert_eq!(grid.raw(0, 0).unwrap(), "10");
//! ```

pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use cell::{Cell, CellState};
pub use error::{Error, Result};
pub use grid::{Grid, GridLimits};

/// Default maximum number of rows in a grid
pub const DEFAULT_MAX_ROWS: usize = 1_048_576;

/// Default maximum number of columns in a grid
pub const DEFAULT_MAX_COLS: usize = 16_384;
