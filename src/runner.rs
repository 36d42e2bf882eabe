//! Report execution: open the database, run each report, materialize rows.

use std::io::Write;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Report;
use crate::error::Result;
use crate::format::Formatter;
use crate::value::Value;

/// A fully materialized result set: ordered columns, ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Open the database read-only. A missing or unreadable file fails here,
/// before any report runs; the read-only flag also rules out SQLite's
/// default create-on-open.
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Execute one report and materialize its result.
pub fn run_report(conn: &Connection, report: &Report) -> Result<ResultSet> {
    let mut stmt = conn.prepare(&report.sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut rows = Vec::new();
    let mut raw = stmt.query([])?;
    while let Some(row) = raw.next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            cells.push(Value::from(row.get_ref(i)?));
        }
        rows.push(cells);
    }

    debug!(label = report.label, rows = rows.len(), "report executed");
    Ok(ResultSet {
        label: report.label.to_string(),
        columns,
        rows,
    })
}

/// Run every report in catalog order, rendering each to the sink.
///
/// Reports run sequentially; the first failure aborts the run and propagates,
/// leaving any output already written in place. The connection stays open for
/// the whole run and is released by the caller dropping it, on success or
/// failure alike.
pub fn run_catalog(
    conn: &Connection,
    reports: &[Report],
    formatter: &Formatter,
    sink: &mut impl Write,
) -> Result<()> {
    for report in reports {
        let result = run_report(conn, report)?;
        formatter.render(&result, sink)?;
    }
    Ok(())
}
