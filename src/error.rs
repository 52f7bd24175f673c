//! Error types for report generation.

use thiserror::Error;

/// Errors that can occur while ingesting a probe log or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No input file was supplied.
    #[error("no input file provided")]
    MissingInput,

    /// The configuration could not be loaded or holds an invalid value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The input could not be opened or read.
    #[error("failed to read {context}: {source}")]
    Io {
        /// File path or source description.
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid JSON.
    #[error("line {line}: malformed JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line is valid JSON but does not describe a record.
    #[error("line {line}: unexpected record layout: {source}")]
    Schema {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A table row does not have one cell per header column.
    #[error("row {row} has {actual} cells but the header has {expected} columns")]
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The structured dump could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Classify a decoding failure on the given 1-based line.
    ///
    /// Syntax errors and truncated input are parse errors; well-formed JSON
    /// with missing or mistyped fields is a schema error.
    pub fn from_line(line: usize, source: serde_json::Error) -> Self {
        match source.classify() {
            serde_json::error::Category::Data => ReportError::Schema { line, source },
            _ => ReportError::Parse { line, source },
        }
    }

    /// Whether lenient mode may skip the offending line and continue.
    pub fn is_skippable(&self) -> bool {
        matches!(self, ReportError::Parse { .. } | ReportError::Schema { .. })
    }
}
