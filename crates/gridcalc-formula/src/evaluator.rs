//! Formula evaluator
//!
//! Memoized recursive evaluation over a [`Grid`]. Each cell moves from
//! `Unevaluated` to `Evaluated` exactly once; re-requesting an evaluated
//! cell returns the cached value without re-descending into its
//! references.

use gridcalc_core::Grid;
use tracing::debug;

use crate::error::{EvalError, EvalResult};
use crate::operand::{parse_literal, parse_operand, Operand};

/// The arithmetic operator characters recognized in a formula
const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Evaluates formulas against a grid, filling its value cache
pub struct Evaluator<'a> {
    grid: &'a mut Grid,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over the given grid
    pub fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    /// Evaluate the cell at (`row`, `col`), returning its integer value.
    ///
    /// A cell whose raw text starts with `=` is a formula: exactly two
    /// operands separated by one of `+ - * /`. Anything else is a literal
    /// integer. Referenced cells are evaluated recursively and every
    /// result is cached, so each cell is computed at most once.
    ///
    /// There is no cycle guard: a formula reference cycle recurses until
    /// the stack is exhausted.
    pub fn evaluate(&mut self, row: usize, col: usize) -> EvalResult<i64> {
        if let Some(value) = self.grid.cached(row, col)? {
            return Ok(value);
        }

        let raw = self.grid.raw(row, col)?.to_string();
        let value = match raw.strip_prefix('=') {
            Some(expr) => self.evaluate_expr(expr).map_err(|e| e.in_cell(&raw))?,
            None => parse_literal(&raw).map_err(|e| e.in_cell(&raw))?,
        };

        self.grid.set_cached(row, col, value)?;
        Ok(value)
    }

    /// Evaluate every cell in row-major order.
    ///
    /// Stops at the first error. Memoization makes the final values
    /// order-independent for acyclic reference graphs; the order only
    /// determines which error surfaces first.
    pub fn evaluate_all(&mut self) -> EvalResult<()> {
        for row in 0..self.grid.num_rows() {
            for col in 0..self.grid.num_cols() {
                self.evaluate(row, col)?;
            }
        }
        debug!(
            rows = self.grid.num_rows(),
            cols = self.grid.num_cols(),
            "grid fully evaluated"
        );
        Ok(())
    }

    /// Evaluate the expression following `=`.
    ///
    /// The expression splits at the first operator character found
    /// scanning left to right. A leading sign on the first operand is
    /// taken as the operator (matching the historical scan), which leaves
    /// an empty first operand.
    fn evaluate_expr(&mut self, expr: &str) -> EvalResult<i64> {
        let (pos, op) = expr
            .char_indices()
            .find(|&(_, c)| OPERATORS.contains(&c))
            .ok_or_else(|| EvalError::MissingOperator(expr.to_string()))?;

        let lhs = self.resolve_operand(&expr[..pos])?;
        let rhs = self.resolve_operand(&expr[pos + 1..])?;
        apply(op, lhs, rhs)
    }

    /// Resolve an operand to its value, recursing through references
    fn resolve_operand(&mut self, token: &str) -> EvalResult<i64> {
        match parse_operand(token)? {
            Operand::Literal(value) => Ok(value),
            Operand::Reference(cell_ref) => {
                let col = self
                    .grid
                    .column_index(&cell_ref.column)
                    .ok_or_else(|| EvalError::UnknownColumn(cell_ref.column.clone()))?;
                let row = self
                    .grid
                    .row_index(cell_ref.row_id)
                    .ok_or(EvalError::UnknownRow(cell_ref.row_id))?;
                self.evaluate(row, col)
            }
        }
    }
}

fn apply(op: char, lhs: i64, rhs: i64) -> EvalResult<i64> {
    match op {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        '/' => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
        // Unreachable given the scan domain, handled defensively.
        other => Err(EvalError::UnknownOperator(other)),
    }
}
