//! Output formatters for report results.
//!
//! Renders a materialized result set as a box-drawn table (the default),
//! pretty-printed JSON, or CSV, each preceded by the report label.

use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::runner::ResultSet;
use crate::value::Value;

/// Maximum cell width before truncation with an ellipsis.
const MAX_COLUMN_WIDTH: usize = 40;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Renders result sets in the configured format.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render one result set to the sink, labeled with the report name.
    pub fn render(&self, result: &ResultSet, sink: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Table => self.render_table(result, sink),
            OutputFormat::Json => self.render_json(result, sink),
            OutputFormat::Csv => self.render_csv(result, sink),
        }
    }

    fn render_table(&self, result: &ResultSet, sink: &mut impl Write) -> Result<()> {
        writeln!(sink, "--- {} ---", result.label)?;

        if result.columns.is_empty() {
            writeln!(sink, "(0 rows)\n")?;
            return Ok(());
        }

        // Precompute display strings once; widths fit the widest cell,
        // capped at MAX_COLUMN_WIDTH.
        let mut widths: Vec<usize> = result.columns.iter().map(|c| c.len()).collect();
        let mut string_rows: Vec<Vec<String>> = Vec::with_capacity(result.rows.len());
        for row in &result.rows {
            let mut srow = Vec::with_capacity(widths.len());
            for (i, cell) in row.iter().enumerate() {
                let s = cell.display();
                widths[i] = widths[i].max(s.len());
                srow.push(s);
            }
            string_rows.push(srow);
        }
        for width in widths.iter_mut() {
            *width = (*width).min(MAX_COLUMN_WIDTH);
        }

        write_border(sink, &widths, '┌', '┬', '┐')?;
        write_row(sink, &result.columns, &widths)?;
        write_border(sink, &widths, '├', '┼', '┤')?;
        for srow in &string_rows {
            write_row(sink, srow, &widths)?;
        }
        write_border(sink, &widths, '└', '┴', '┘')?;

        let n = string_rows.len();
        let label = if n == 1 { "row" } else { "rows" };
        writeln!(sink, "({} {})\n", n, label)?;
        Ok(())
    }

    fn render_json(&self, result: &ResultSet, sink: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *sink, result)?;
        writeln!(sink)?;
        Ok(())
    }

    fn render_csv(&self, result: &ResultSet, sink: &mut impl Write) -> Result<()> {
        writeln!(sink, "# {}", result.label)?;
        let header: Vec<String> = result.columns.iter().map(|c| csv_escape(c)).collect();
        writeln!(sink, "{}", header.join(","))?;
        for row in &result.rows {
            let fields: Vec<String> = row.iter().map(csv_field).collect();
            writeln!(sink, "{}", fields.join(","))?;
        }
        writeln!(sink)?;
        Ok(())
    }
}

fn truncate(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        value.to_string()
    } else if max_width <= 3 {
        value.chars().take(max_width).collect()
    } else {
        let take = max_width - 3;
        format!("{}...", value.chars().take(take).collect::<String>())
    }
}

fn write_border(
    sink: &mut impl Write,
    widths: &[usize],
    left: char,
    mid: char,
    right: char,
) -> Result<()> {
    let mut line = String::new();
    line.push(left);
    for (idx, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        line.push(if idx == widths.len() - 1 { right } else { mid });
    }
    writeln!(sink, "{}", line)?;
    Ok(())
}

fn write_row<S: AsRef<str>>(sink: &mut impl Write, cells: &[S], widths: &[usize]) -> Result<()> {
    let mut line = String::from("│");
    for (i, cell) in cells.iter().enumerate() {
        let truncated = truncate(cell.as_ref(), widths[i]);
        line.push_str(&format!(" {:width$} │", truncated, width = widths[i]));
    }
    writeln!(sink, "{}", line)?;
    Ok(())
}

/// CSV field from a value. Empty for NULL, matching conventional CSV export.
fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => csv_escape(&other.display()),
    }
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
