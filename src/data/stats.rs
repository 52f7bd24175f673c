//! Running per-site counters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::source::Record;

/// Counters for one site, accumulated over the whole log.
///
/// `invocations == successes + errors` and `availables <= successes` hold at
/// every point of ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub invocations: u64,
    pub successes: u64,
    pub errors: u64,
    pub availables: u64,
    pub last_success: Option<DateTime<Utc>>,
    pub last_available: Option<DateTime<Utc>>,
}

/// Finalized aggregation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    /// Per-site counters in first-seen order.
    pub sites: Vec<(String, SiteStats)>,
    /// Number of records ingested across all sites.
    pub records: u64,
    /// Timestamp of the most recently ingested record.
    pub latest_timestamp: Option<DateTime<Utc>>,
}

impl StatsSummary {
    /// Look up a site's counters by name.
    pub fn get(&self, site: &str) -> Option<&SiteStats> {
        self.sites.iter().find(|(name, _)| name == site).map(|(_, s)| s)
    }
}

/// Streaming aggregator over probe records.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    index: HashMap<String, usize>,
    sites: Vec<(String, SiteStats)>,
    records: u64,
    latest_timestamp: Option<DateTime<Utc>>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the counters for a site.
    fn site_mut(&mut self, site: &str) -> &mut SiteStats {
        let idx = match self.index.get(site) {
            Some(&idx) => idx,
            None => {
                let idx = self.sites.len();
                self.index.insert(site.to_string(), idx);
                self.sites.push((site.to_string(), SiteStats::default()));
                idx
            }
        };
        &mut self.sites[idx].1
    }

    /// Fold one record into the running totals.
    pub fn ingest(&mut self, record: &Record) {
        self.records += 1;
        self.latest_timestamp = Some(record.timestamp);

        for probe in &record.probes {
            let stats = self.site_mut(&probe.site_name);
            stats.invocations += 1;

            // Errored probes say nothing about availability
            if probe.error {
                stats.errors += 1;
                continue;
            }

            stats.successes += 1;
            stats.last_success = Some(record.timestamp);
            if probe.available {
                stats.availables += 1;
                stats.last_available = Some(record.timestamp);
            }
        }
    }

    /// Number of distinct sites seen so far.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    pub fn finalize(self) -> StatsSummary {
        StatsSummary {
            sites: self.sites,
            records: self.records,
            latest_timestamp: self.latest_timestamp,
        }
    }
}
