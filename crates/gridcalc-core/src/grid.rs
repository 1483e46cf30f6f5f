//! Grid storage
//!
//! A rectangular, row-major store of raw cell text and evaluated values.
//! Populated once by a loader, then mutated only through the write-once
//! value cache; after full evaluation it is effectively read-only.

use ahash::AHashMap;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{DEFAULT_MAX_COLS, DEFAULT_MAX_ROWS};

/// Capacity bounds for a [`Grid`]
///
/// Storage is allocated dynamically; the limits are a cap, not a
/// pre-allocation. Exceeding them is a typed error rather than silent
/// truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    /// Maximum number of rows accepted
    pub max_rows: usize,
    /// Maximum number of columns accepted
    pub max_cols: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_cols: DEFAULT_MAX_COLS,
        }
    }
}

#[derive(Debug)]
struct Row {
    id: i64,
    cells: Vec<Cell>,
}

/// The column/row store backing formula evaluation
///
/// Column names are unique; row identifiers are not required to be, and
/// lookup by id returns the first match.
#[derive(Debug)]
pub struct Grid {
    headers: Vec<String>,
    header_index: AHashMap<String, usize>,
    rows: Vec<Row>,
    limits: GridLimits,
}

impl Grid {
    /// Create an empty grid with default limits
    pub fn new() -> Self {
        Self::with_limits(GridLimits::default())
    }

    /// Create an empty grid with the given limits
    pub fn with_limits(limits: GridLimits) -> Self {
        Self {
            headers: Vec::new(),
            header_index: AHashMap::new(),
            rows: Vec::new(),
            limits,
        }
    }

    /// The configured capacity bounds
    pub fn limits(&self) -> GridLimits {
        self.limits
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column names in insertion order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    // === Construction (load phase) ===

    /// Append a column, returning its index
    pub fn push_column<S: Into<String>>(&mut self, name: S) -> Result<usize> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyColumnName);
        }
        if self.header_index.contains_key(&name) {
            return Err(Error::DuplicateColumn(name));
        }
        if self.headers.len() >= self.limits.max_cols {
            return Err(Error::ColumnCapacityExceeded(self.limits.max_cols));
        }
        if !self.rows.is_empty() {
            // A late column would break the rectangular invariant.
            return Err(Error::ColumnAfterRows);
        }
        let index = self.headers.len();
        self.header_index.insert(name.clone(), index);
        self.headers.push(name);
        Ok(index)
    }

    /// Append a row of raw cell text, returning its index
    ///
    /// The number of cells must equal the column count.
    pub fn push_row(&mut self, id: i64, cells: Vec<String>) -> Result<usize> {
        if cells.len() != self.headers.len() {
            return Err(Error::RowWidth {
                expected: self.headers.len(),
                actual: cells.len(),
            });
        }
        if self.rows.len() >= self.limits.max_rows {
            return Err(Error::RowCapacityExceeded(self.limits.max_rows));
        }
        let index = self.rows.len();
        self.rows.push(Row {
            id,
            cells: cells.into_iter().map(Cell::new).collect(),
        });
        Ok(index)
    }

    // === Lookup ===

    /// Resolve a column name to its index
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header_index.get(name).copied()
    }

    /// Resolve a row identifier to its index
    ///
    /// Identifiers are not required to be unique; the first match wins.
    pub fn row_index(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// The identifier of the row at `row`
    pub fn row_id(&self, row: usize) -> Result<i64> {
        self.row(row).map(|r| r.id)
    }

    /// The raw text of the cell at (`row`, `col`)
    pub fn raw(&self, row: usize, col: usize) -> Result<&str> {
        self.cell(row, col).map(Cell::raw)
    }

    /// A borrowed view of the cell at (`row`, `col`)
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let num_cols = self.num_cols();
        let row = self.row(row)?;
        row.cells
            .get(col)
            .ok_or(Error::ColumnOutOfBounds(col, num_cols))
    }

    // === Value cache (evaluation phase) ===

    /// The cached value of the cell at (`row`, `col`), if evaluated
    pub fn cached(&self, row: usize, col: usize) -> Result<Option<i64>> {
        self.cell(row, col).map(Cell::value)
    }

    /// Store the evaluated value of the cell at (`row`, `col`)
    ///
    /// Each cell is written at most once for the lifetime of the grid;
    /// a second write is a logic error.
    pub fn set_cached(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        let num_cols = self.num_cols();
        let num_rows = self.num_rows();
        let cell = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfBounds(row, num_rows))?
            .cells
            .get_mut(col)
            .ok_or(Error::ColumnOutOfBounds(col, num_cols))?;
        if cell.value().is_some() {
            return Err(Error::CellAlreadyEvaluated(row, col));
        }
        cell.set_value(value);
        Ok(())
    }

    fn row(&self, row: usize) -> Result<&Row> {
        self.rows
            .get(row)
            .ok_or(Error::RowOutOfBounds(row, self.rows.len()))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_column("B").unwrap();
        grid.push_row(1, vec!["10".into(), "=A1+5".into()]).unwrap();
        grid.push_row(2, vec!["=A1*2".into(), "7".into()]).unwrap();
        grid
    }

    #[test]
    fn empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
        assert_eq!(grid.column_index("A"), None);
        assert_eq!(grid.row_index(1), None);
    }

    #[test]
    fn column_lookup() {
        let grid = sample_grid();
        assert_eq!(grid.column_index("A"), Some(0));
        assert_eq!(grid.column_index("B"), Some(1));
        assert_eq!(grid.column_index("Z"), None);
        assert_eq!(grid.headers(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn row_lookup_first_match_wins() {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_row(5, vec!["1".into()]).unwrap();
        grid.push_row(5, vec!["2".into()]).unwrap();
        grid.push_row(9, vec!["3".into()]).unwrap();

        assert_eq!(grid.row_index(5), Some(0));
        assert_eq!(grid.row_index(9), Some(2));
        assert_eq!(grid.row_index(999), None);
    }

    #[test]
    fn raw_access() {
        let grid = sample_grid();
        assert_eq!(grid.raw(0, 1).unwrap(), "=A1+5");
        assert_eq!(grid.raw(1, 0).unwrap(), "=A1*2");
        assert!(matches!(grid.raw(2, 0), Err(Error::RowOutOfBounds(2, 2))));
        assert!(matches!(
            grid.raw(0, 2),
            Err(Error::ColumnOutOfBounds(2, 2))
        ));
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        assert!(matches!(
            grid.push_column("A"),
            Err(Error::DuplicateColumn(_))
        ));
    }

    #[test]
    fn empty_column_name_rejected() {
        let mut grid = Grid::new();
        assert!(matches!(grid.push_column(""), Err(Error::EmptyColumnName)));
    }

    #[test]
    fn row_width_enforced() {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_column("B").unwrap();
        let err = grid.push_row(1, vec!["10".into()]).unwrap_err();
        assert!(matches!(
            err,
            Error::RowWidth {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn capacity_limits_enforced() {
        let limits = GridLimits {
            max_rows: 1,
            max_cols: 1,
        };
        let mut grid = Grid::with_limits(limits);
        grid.push_column("A").unwrap();
        assert!(matches!(
            grid.push_column("B"),
            Err(Error::ColumnCapacityExceeded(1))
        ));
        grid.push_row(1, vec!["1".into()]).unwrap();
        assert!(matches!(
            grid.push_row(2, vec!["2".into()]),
            Err(Error::RowCapacityExceeded(1))
        ));
    }

    #[test]
    fn cache_is_write_once() {
        let mut grid = sample_grid();
        assert_eq!(grid.cached(0, 0).unwrap(), None);

        grid.set_cached(0, 0, 10).unwrap();
        assert_eq!(grid.cached(0, 0).unwrap(), Some(10));

        let err = grid.set_cached(0, 0, 11).unwrap_err();
        assert!(matches!(err, Error::CellAlreadyEvaluated(0, 0)));
        // First write survives
        assert_eq!(grid.cached(0, 0).unwrap(), Some(10));
    }
}
