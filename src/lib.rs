//! Fixed-catalog SQL reporting over the classic-models SQLite database.
//!
//! # Intention
//!
//! - Execute a fixed ordered catalog of named, read-only reports against a
//!   file-backed SQLite database and render each result set to a sink.
//! - Encapsulate SQLite access, result materialization, and rendering.
//!
//! # Architectural Boundaries
//!
//! - The schema (offices, employees, customers, orders, orderdetails,
//!   products, payments) is an external fixed input; this crate never
//!   creates, migrates, or mutates it.
//! - Execution is sequential and synchronous; there is no caching, retry,
//!   or partial-failure recovery. The first failing report aborts the run.

pub mod catalog;
pub mod error;
pub mod format;
pub mod runner;
pub mod value;

pub use catalog::{catalog, Report, DEFAULT_PURCHASER_THRESHOLD};
pub use error::{ReportError, Result};
pub use format::{Formatter, OutputFormat};
pub use runner::{open_database, run_catalog, run_report, ResultSet};
pub use value::Value;
