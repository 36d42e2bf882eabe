//! Error types for the report runner.
//!
//! Every failure is fatal to the run: a connection error aborts before any
//! report executes, a query error aborts at that report. Nothing is caught,
//! retried, or translated beyond the wrapper variants here.

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while running the report catalog.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Connection or query failure from SQLite.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failure writing rendered output to the sink.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure in the JSON output format.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
