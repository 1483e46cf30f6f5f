//! gridcalc CLI - evaluate a delimited formula table

use anyhow::{ensure, Context, Result};
use clap::Parser;
use gridcalc::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(
    author,
    version,
    about = "Evaluate literal and formula cells in a delimited table"
)]
struct Cli {
    /// Input file
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Maximum number of rows accepted
    #[arg(long)]
    max_rows: Option<usize>,

    /// Maximum number of columns accepted
    #[arg(long)]
    max_cols: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    ensure!(
        cli.delimiter.is_ascii(),
        "Delimiter must be a single ASCII character"
    );
    let delimiter = cli.delimiter as u8;

    let mut limits = GridLimits::default();
    if let Some(max_rows) = cli.max_rows {
        limits.max_rows = max_rows;
    }
    if let Some(max_cols) = cli.max_cols {
        limits.max_cols = max_cols;
    }

    let read_options = ReadOptions {
        delimiter,
        limits,
        ..ReadOptions::default()
    };
    let grid = gridcalc::evaluate_path(&cli.input, &read_options)
        .with_context(|| format!("Failed to evaluate '{}'", cli.input.display()))?;

    let write_options = WriteOptions {
        delimiter,
        ..WriteOptions::default()
    };
    match cli.output {
        Some(path) => {
            GridWriter::write_path(&grid, &path, &write_options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
        None => {
            let rendered = gridcalc::render_to_string(&grid, &write_options)?;
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
