//! File-based record source.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{LineSource, Record, RecordSource};
use crate::error::ReportError;

/// A record source that reads a newline-delimited JSON probe log from disk.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    inner: LineSource<BufReader<File>>,
}

impl FileSource {
    /// Open the log at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ReportError::Io {
            context: path.display().to_string(),
            source,
        })?;
        let description = format!("file: {}", path.display());
        debug!(path = %path.display(), "opened probe log");
        Ok(Self {
            inner: LineSource::new(BufReader::new(file), &description),
            path,
        })
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn next_record(&mut self) -> Option<Result<Record, ReportError>> {
        self.inner.next_record()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}
