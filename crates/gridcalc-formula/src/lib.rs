//! # gridcalc-formula
//!
//! Formula resolution engine for gridcalc.
//!
//! This crate provides:
//! - Operand classification and parsing (literal integer or cell reference)
//! - Memoized recursive evaluation of inter-cell dependencies
//!
//! Formulas are a single binary operation: `=` followed by two operands
//! separated by one of `+ - * /`. Each operand is either a decimal integer
//! or a reference of the form `<ColumnName><RowID>` (e.g. `B12`).
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::Grid;
//! use gridcalc_formula::Evaluator;
//!
//! let mut grid = Grid::new();
//! grid.push_column("A").unwrap();
//! grid.push_column("B").unwrap();
//! grid.push_row(1, vec!["10".into(), "=A1+5".into()]).unwrap();
//!
//! let mut evaluator = Evaluator::new(&mut grid);
//! assert_eq!(evaluator.evaluate(0, 1).unwrap(), 15);
//! ```

pub mod error;
pub mod evaluator;
pub mod operand;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use operand::{parse_literal, parse_operand, CellRef, Operand};
