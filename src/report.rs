//! Report driver: one pass over a record source, then rendering.
//!
//! Output is rendered into a single string so that a failure anywhere in
//! the run leaves stdout untouched.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{OutputFormat, ReportConfig};
use crate::data::{IntervalTracker, SiteIntervals, StatsAggregator, StatsSummary};
use crate::error::ReportError;
use crate::render::views;
use crate::source::{FileSource, RecordSource};

/// Finalized result of one pass over a probe log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stats: StatsSummary,
    pub intervals: Vec<SiteIntervals>,
    /// Lines dropped in lenient mode.
    pub skipped: usize,
}

impl Report {
    /// Consume `source`, feeding every record to both the aggregator and the
    /// interval tracker.
    ///
    /// The first malformed line aborts the run unless `skip_invalid` is set.
    pub fn collect(
        source: &mut dyn RecordSource,
        config: &ReportConfig,
    ) -> Result<Self, ReportError> {
        debug!(source = source.description(), "collecting report");

        let mut stats = StatsAggregator::new();
        let mut tracker = IntervalTracker::new(config.close_policy);
        let mut skipped = 0;

        while let Some(next) = source.next_record() {
            let record = match next {
                Ok(record) => record,
                Err(e) if config.skip_invalid && e.is_skippable() => {
                    warn!(source = source.description(), error = %e, "skipping invalid line");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            stats.ingest(&record);
            tracker.ingest(&record);
        }

        info!(
            sites = stats.site_count(),
            open_intervals = tracker.open_count(),
            skipped,
            "input exhausted"
        );
        let stats = stats.finalize();
        debug!(
            records = stats.records,
            latest = ?stats.latest_timestamp,
            "report collected"
        );

        Ok(Self {
            stats,
            intervals: tracker.finalize(),
            skipped,
        })
    }

    /// Render the report in the configured output format.
    pub fn render(&self, config: &ReportConfig) -> Result<String, ReportError> {
        match config.output {
            OutputFormat::Table => {
                let stats = views::stats_table(
                    &self.stats,
                    config.display_zone,
                    config.include_timestamps,
                )?;
                let intervals = views::intervals_table(&self.intervals, config.display_zone)?;
                Ok(format!("{stats}\n{intervals}"))
            }
            OutputFormat::Json => views::stats_json(&self.stats),
        }
    }
}

/// Build the full report text for the probe log at `path`.
pub fn run(path: &Path, config: &ReportConfig) -> Result<String, ReportError> {
    let mut source = FileSource::open(path)?;
    Report::collect(&mut source, config)?.render(config)
}
