//! Plain-text table rendering with variable-height rows.
//!
//! A row holds one [`Cell`] per header column. Scalar cells occupy one line;
//! list cells stack their items on consecutive lines, and the row grows to
//! the tallest list. Scalars are printed on the row's first line only.
//!
//! ```text
//! --------------------------------
//! | Site  | Availability periods |
//! --------------------------------
//! | canon | 10:05 - present, ... |
//! |       | 08:00 - 09:30, ...   |
//! --------------------------------
//! ```

use crate::error::ReportError;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Rendered on the first line of its row.
    Scalar(String),
    /// Rendered one item per line.
    List(Vec<String>),
}

impl Cell {
    /// Number of physical lines this cell needs.
    fn height(&self) -> usize {
        match self {
            Cell::Scalar(_) => 1,
            Cell::List(items) => items.len(),
        }
    }

    /// Text shown on the given physical line of the row.
    fn line(&self, index: usize) -> &str {
        match self {
            Cell::Scalar(value) if index == 0 => value,
            Cell::Scalar(_) => "",
            Cell::List(items) => items.get(index).map(String::as_str).unwrap_or(""),
        }
    }

    fn widest(&self) -> usize {
        match self {
            Cell::Scalar(value) => value.chars().count(),
            Cell::List(items) => items.iter().map(|i| i.chars().count()).max().unwrap_or(0),
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Scalar(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Scalar(value.to_string())
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for Cell {
    fn from(items: Vec<String>) -> Self {
        Cell::List(items)
    }
}

/// One logical table row.
pub type Row = Vec<Cell>;

/// Render `rows` under `header` as an aligned text table.
///
/// Fails with [`ReportError::Shape`] if any row's cell count differs from
/// the number of header columns. Output is deterministic for equal input.
pub fn render(header: &[&str], rows: &[Row]) -> Result<String, ReportError> {
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != header.len()) {
        return Err(ReportError::Shape {
            row,
            expected: header.len(),
            actual: cells.len(),
        });
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.widest());
        }
    }

    let header_line = format_line(header.iter().copied(), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![divider.clone(), header_line, divider.clone()];
    for row in rows {
        let height = row.iter().map(Cell::height).max().unwrap_or(0).max(1);
        lines.extend(
            (0..height).map(|index| format_line(row.iter().map(|cell| cell.line(index)), &widths)),
        );
    }
    lines.push(divider);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Left-justify each value to its column width between `| ` and ` |`.
fn format_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let columns: Vec<String> = values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect();
    format!("| {} |", columns.join(" | "))
}
