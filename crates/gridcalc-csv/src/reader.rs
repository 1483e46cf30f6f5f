//! Delimited-text loader
//!
//! Parses delimited input into a [`Grid`]: the first record names the
//! columns, every following record is a row identifier and one raw cell
//! per column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::options::ReadOptions;
use gridcalc_core::Grid;

/// Delimited-text reader
pub struct GridReader;

impl GridReader {
    /// Load a grid from a file
    pub fn read_path<P: AsRef<Path>>(path: P, options: &ReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Load a grid from a reader
    pub fn read<R: Read>(reader: R, options: &ReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(CsvError::EmptyInput),
        };

        let mut grid = Grid::with_limits(options.limits);
        for (idx, field) in header.iter().enumerate() {
            // The original strips a UTF-8 BOM from the start of the line.
            let name = if idx == 0 {
                field.trim_start_matches('\u{feff}')
            } else {
                field
            };
            // Empty header fields are skipped, so ",A,B" names two columns.
            if name.is_empty() {
                continue;
            }
            grid.push_column(name)?;
        }
        if grid.num_cols() == 0 {
            return Err(CsvError::NoColumns);
        }

        for record in records {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());

            let mut fields = record.iter();
            let id_field = fields.next().unwrap_or_default();
            let id: i64 = id_field
                .trim()
                .parse()
                .map_err(|_| CsvError::InvalidRowId {
                    line,
                    text: id_field.to_string(),
                })?;

            grid.push_row(id, fields.map(str::to_string).collect())?;
        }

        debug!(
            rows = grid.num_rows(),
            cols = grid.num_cols(),
            "loaded grid"
        );
        Ok(grid)
    }
}
