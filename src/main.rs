//! classicmodels-reports - run the fixed report catalog and print each result.
//!
//! # Usage
//!
//! ```bash
//! # Table output (default)
//! classicmodels-reports data.sqlite
//!
//! # JSON output, custom threshold for the under-reached products report
//! classicmodels-reports data.sqlite --format json --purchaser-threshold 50
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use classicmodels_reports::{
    catalog, open_database, run_catalog, Formatter, OutputFormat, DEFAULT_PURCHASER_THRESHOLD,
};

/// Run the classic-models report catalog against a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "classicmodels-reports", version)]
struct Cli {
    /// Path to the SQLite database file
    database: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "table")]
    format: OutputFormat,

    /// Distinct-purchaser cutoff for the under-reached products report
    #[arg(long = "purchaser-threshold", default_value_t = DEFAULT_PURCHASER_THRESHOLD)]
    purchaser_threshold: u32,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let reports = catalog(cli.purchaser_threshold);
    info!(
        database = %cli.database.display(),
        reports = reports.len(),
        "starting report run"
    );

    // The connection is scoped to the run; dropping it on any exit path,
    // including an error return, releases the file lock.
    let conn = open_database(&cli.database)?;

    let formatter = Formatter::new(cli.format);
    let stdout = io::stdout();
    let mut sink = stdout.lock();
    run_catalog(&conn, &reports, &formatter, &mut sink)?;
    sink.flush()?;

    Ok(())
}
