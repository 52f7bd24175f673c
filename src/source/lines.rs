//! Newline-delimited JSON record source.
//!
//! Reads one [`Record`] per line from any buffered reader. Lines are read as
//! raw bytes, so a line that is not valid UTF-8 is a parse error on that line
//! rather than a read failure.

use std::io::BufRead;

use super::{Record, RecordSource};
use crate::error::ReportError;

/// A record source over newline-delimited JSON.
///
/// Whitespace-only lines are ignored. Line numbers in errors are 1-based and
/// count every physical line, blank or not.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    description: String,
    line: usize,
    buf: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R, description: &str) -> Self {
        Self {
            reader,
            description: description.to_string(),
            line: 0,
            buf: Vec::new(),
            exhausted: false,
        }
    }
}

fn trim_ascii(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !first.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}

impl<R: BufRead + std::fmt::Debug> RecordSource for LineSource<R> {
    fn next_record(&mut self) -> Option<Result<Record, ReportError>> {
        while !self.exhausted {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.exhausted = true,
                Ok(_) => {
                    self.line += 1;
                    let bytes = trim_ascii(&self.buf);
                    if bytes.is_empty() {
                        continue;
                    }
                    return Some(
                        serde_json::from_slice::<Record>(bytes)
                            .map_err(|e| ReportError::from_line(self.line, e)),
                    );
                }
                Err(source) => {
                    self.exhausted = true;
                    return Some(Err(ReportError::Io {
                        context: self.description.clone(),
                        source,
                    }));
                }
            }
        }
        None
    }

    fn description(&self) -> &str {
        &self.description
    }
}
