//! Delimited-text renderer
//!
//! Serializes a fully evaluated [`Grid`] back to delimited text: a header
//! line with an empty leading field, then one line per row holding the row
//! identifier and each column's evaluated value.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{LineTerminator, WriteOptions};
use gridcalc_core::{Error, Grid};

/// Delimited-text writer
pub struct GridWriter;

impl GridWriter {
    /// Render a grid to a file
    pub fn write_path<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &WriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Render a grid to a writer
    ///
    /// Every cell must already be evaluated; an unevaluated cell is a
    /// typed error, not a panic.
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &WriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        let mut header = Vec::with_capacity(grid.num_cols() + 1);
        header.push(String::new());
        header.extend(grid.headers().iter().cloned());
        csv_writer.write_record(&header)?;

        for row in 0..grid.num_rows() {
            let mut record = Vec::with_capacity(grid.num_cols() + 1);
            record.push(grid.row_id(row)?.to_string());
            for col in 0..grid.num_cols() {
                let value = grid
                    .cached(row, col)?
                    .ok_or(Error::NotEvaluated(row, col))?;
                record.push(value.to_string());
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a grid to a string
    pub fn to_string(grid: &Grid, options: &WriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;
    use pretty_assertions::assert_eq;

    fn evaluated_grid() -> Grid {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_column("B").unwrap();
        grid.push_row(1, vec!["10".into(), "=A1+5".into()]).unwrap();
        grid.push_row(2, vec!["=A1*2".into(), "7".into()]).unwrap();
        grid.set_cached(0, 0, 10).unwrap();
        grid.set_cached(0, 1, 15).unwrap();
        grid.set_cached(1, 0, 20).unwrap();
        grid.set_cached(1, 1, 7).unwrap();
        grid
    }

    #[test]
    fn renders_header_and_rows() {
        let rendered = GridWriter::to_string(&evaluated_grid(), &WriteOptions::default()).unwrap();
        assert_eq!(rendered, ",A,B\n1,10,15\n2,20,7\n");
    }

    #[test]
    fn unevaluated_cell_is_an_error() {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_row(1, vec!["10".into()]).unwrap();

        let err = GridWriter::to_string(&grid, &WriteOptions::default()).unwrap_err();
        assert!(matches!(err, CsvError::Grid(Error::NotEvaluated(0, 0))));
    }

    #[test]
    fn write_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        GridWriter::write_path(&evaluated_grid(), &path, &WriteOptions::default()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, ",A,B\n1,10,15\n2,20,7\n");
    }

    #[test]
    fn negative_values_render_verbatim() {
        let mut grid = Grid::new();
        grid.push_column("A").unwrap();
        grid.push_row(-3, vec!["-5".into()]).unwrap();
        grid.set_cached(0, 0, -5).unwrap();

        let rendered = GridWriter::to_string(&grid, &WriteOptions::default()).unwrap();
        assert_eq!(rendered, ",A\n-3,-5\n");
    }
}
