//! # gridcalc-csv
//!
//! Delimited-text loader and renderer for gridcalc.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{LineTerminator, ReadOptions, WriteOptions};
pub use reader::GridReader;
pub use writer::GridWriter;
