//! Record source abstraction for probe logs.
//!
//! A [`RecordSource`] yields a finite, forward-only sequence of [`Record`]s.
//! The report driver pulls from it exactly once.

mod file;
mod lines;
mod record;

pub use file::FileSource;
pub use lines::LineSource;
pub use record::{Probe, Record};

use std::fmt::Debug;

use crate::error::ReportError;

/// Trait for reading probe records from various inputs.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use availwatch::{LineSource, RecordSource};
///
/// let mut source = LineSource::new(Cursor::new(""), "inline");
/// assert!(source.next_record().is_none());
/// ```
pub trait RecordSource: Debug {
    /// Read the next record.
    ///
    /// Returns `None` once the input is exhausted. An `Err` describes the
    /// offending line; callers decide whether to abort or continue.
    fn next_record(&mut self) -> Option<Result<Record, ReportError>>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}

/// A source over records already held in memory.
#[derive(Debug)]
pub struct VecSource {
    records: std::vec::IntoIter<Record>,
}

impl VecSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl RecordSource for VecSource {
    fn next_record(&mut self) -> Option<Result<Record, ReportError>> {
        self.records.next().map(Ok)
    }

    fn description(&self) -> &str {
        "memory"
    }
}
