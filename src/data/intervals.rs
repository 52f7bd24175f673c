//! Reconstruction of contiguous availability intervals per site.
//!
//! Each site runs a two-state machine driven by its probes:
//!
//! ```text
//!              available=true
//!   Unavailable ──────────────▶ Available ──┐
//!        ▲                        │         │ available=true
//!        │     available=false    │ ◀───────┘ (extend)
//!        └────────────────────────┘
//!              (close interval)
//! ```
//!
//! Errored probes never move the machine. Intervals still open when the log
//! ends are emitted as ongoing (`end == None`).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::source::Record;

/// Which timestamp ends an interval when a site stops being available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// The record that first showed the site unavailable.
    #[default]
    FirstUnavailable,
    /// The last record that confirmed the site available.
    LastAvailable,
}

/// A contiguous span during which a site was observed available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityInterval {
    pub site: String,
    pub start: DateTime<Utc>,
    /// `None` while the interval is still ongoing at the end of the log.
    pub end: Option<DateTime<Utc>>,
}

impl AvailabilityInterval {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

/// All intervals recorded for one site, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIntervals {
    pub site: String,
    pub intervals: Vec<AvailabilityInterval>,
}

impl SiteIntervals {
    /// Intervals in reporting order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &AvailabilityInterval> {
        self.intervals.iter().rev()
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenInterval {
    start: DateTime<Utc>,
    last_confirmed: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
enum SiteState {
    #[default]
    Unavailable,
    Available(OpenInterval),
}

#[derive(Debug, Default)]
struct SiteTrack {
    state: SiteState,
    closed: Vec<AvailabilityInterval>,
}

/// Streaming interval tracker over probe records.
#[derive(Debug, Default)]
pub struct IntervalTracker {
    policy: ClosePolicy,
    index: HashMap<String, usize>,
    sites: Vec<(String, SiteTrack)>,
}

impl IntervalTracker {
    pub fn new(policy: ClosePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    fn site_mut(&mut self, site: &str) -> &mut SiteTrack {
        let idx = match self.index.get(site) {
            Some(&idx) => idx,
            None => {
                let idx = self.sites.len();
                self.index.insert(site.to_string(), idx);
                self.sites.push((site.to_string(), SiteTrack::default()));
                idx
            }
        };
        &mut self.sites[idx].1
    }

    /// Advance every site mentioned in the record.
    ///
    /// Sites are registered on first mention even when the probe errored, so
    /// the output lists them in the same order as the stats.
    pub fn ingest(&mut self, record: &Record) {
        let policy = self.policy;
        let at = record.timestamp;

        for probe in &record.probes {
            let track = self.site_mut(&probe.site_name);
            if probe.error {
                continue;
            }

            track.state = match (track.state, probe.available) {
                (SiteState::Unavailable, true) => SiteState::Available(OpenInterval {
                    start: at,
                    last_confirmed: at,
                }),
                (SiteState::Available(open), true) => SiteState::Available(OpenInterval {
                    last_confirmed: at,
                    ..open
                }),
                (SiteState::Available(open), false) => {
                    let end = match policy {
                        ClosePolicy::FirstUnavailable => at,
                        ClosePolicy::LastAvailable => open.last_confirmed,
                    };
                    track.closed.push(AvailabilityInterval {
                        site: probe.site_name.clone(),
                        start: open.start,
                        end: Some(end),
                    });
                    SiteState::Unavailable
                }
                (SiteState::Unavailable, false) => SiteState::Unavailable,
            };
        }
    }

    /// Number of sites currently inside an open interval.
    pub fn open_count(&self) -> usize {
        self.sites
            .iter()
            .filter(|(_, t)| matches!(t.state, SiteState::Available(_)))
            .count()
    }

    /// Flush open intervals as ongoing and return every site's list.
    pub fn finalize(self) -> Vec<SiteIntervals> {
        self.sites
            .into_iter()
            .map(|(site, mut track)| {
                if let SiteState::Available(open) = track.state {
                    track.closed.push(AvailabilityInterval {
                        site: site.clone(),
                        start: open.start,
                        end: None,
                    });
                }
                SiteIntervals {
                    site,
                    intervals: track.closed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Probe;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, minute, 0).unwrap()
    }

    fn record(minute: u32, probes: Vec<Probe>) -> Record {
        Record {
            timestamp: ts(minute),
            probes,
        }
    }

    fn run(policy: ClosePolicy, samples: &[(u32, &str, bool, bool)]) -> Vec<SiteIntervals> {
        let mut tracker = IntervalTracker::new(policy);
        for &(minute, site, error, available) in samples {
            tracker.ingest(&record(minute, vec![Probe::new(site, error, available)]));
        }
        tracker.finalize()
    }

    fn intervals_for<'a>(out: &'a [SiteIntervals], site: &str) -> &'a [AvailabilityInterval] {
        &out.iter().find(|s| s.site == site).unwrap().intervals
    }

    #[test]
    fn test_single_available_is_ongoing() {
        let out = run(ClosePolicy::default(), &[(0, "A", false, true)]);
        let a = intervals_for(&out, "A");
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].start, ts(0));
        assert!(a[0].is_ongoing());
    }

    #[test]
    fn test_closes_at_first_unavailable() {
        let out = run(
            ClosePolicy::FirstUnavailable,
            &[(0, "A", false, true), (5, "A", false, true), (10, "A", false, false)],
        );
        let a = intervals_for(&out, "A");
        assert_eq!(
            a,
            &[AvailabilityInterval {
                site: "A".into(),
                start: ts(0),
                end: Some(ts(10)),
            }]
        );
    }

    #[test]
    fn test_closes_at_last_available() {
        let out = run(
            ClosePolicy::LastAvailable,
            &[(0, "A", false, true), (5, "A", false, true), (10, "A", false, false)],
        );
        let a = intervals_for(&out, "A");
        assert_eq!(a[0].end, Some(ts(5)));
    }

    #[test]
    fn test_error_probe_is_noop() {
        let out = run(ClosePolicy::default(), &[(0, "B", true, false)]);
        assert!(intervals_for(&out, "B").is_empty());

        // An error in the middle neither closes nor splits the interval
        let out = run(
            ClosePolicy::default(),
            &[(0, "A", false, true), (1, "A", true, false), (2, "A", false, true), (3, "A", false, false)],
        );
        let a = intervals_for(&out, "A");
        assert_eq!(a.len(), 1);
        assert_eq!((a[0].start, a[0].end), (ts(0), Some(ts(3))));
    }

    #[test]
    fn test_never_available_has_no_intervals() {
        let out = run(
            ClosePolicy::default(),
            &[(0, "A", false, false), (1, "A", false, false), (2, "A", true, true)],
        );
        assert!(intervals_for(&out, "A").is_empty());
    }

    #[test]
    fn test_flapping_site_records_every_interval() {
        let out = run(
            ClosePolicy::default(),
            &[
                (0, "A", false, true),
                (1, "A", false, false),
                (2, "A", false, true),
                (3, "A", false, false),
                (4, "A", false, true),
            ],
        );
        let a = intervals_for(&out, "A");
        assert_eq!(a.len(), 3);
        assert_eq!((a[0].start, a[0].end), (ts(0), Some(ts(1))));
        assert_eq!((a[1].start, a[1].end), (ts(2), Some(ts(3))));
        assert!(a[2].is_ongoing());

        // Only the final interval may be ongoing
        assert!(a[..2].iter().all(|i| !i.is_ongoing()));
        assert!(a.iter().filter_map(|i| i.end.map(|e| (i.start, e))).all(|(s, e)| s <= e));

        let site = out.iter().find(|s| s.site == "A").unwrap();
        let newest: Vec<_> = site.newest_first().map(|i| i.start).collect();
        assert_eq!(newest, vec![ts(4), ts(2), ts(0)]);
    }

    #[test]
    fn test_interleaved_sites_are_independent() {
        let mut tracker = IntervalTracker::new(ClosePolicy::default());
        tracker.ingest(&record(0, vec![Probe::new("A", false, true), Probe::new("B", false, false)]));
        tracker.ingest(&record(1, vec![Probe::new("A", false, false), Probe::new("B", false, true)]));
        assert_eq!(tracker.open_count(), 1);
        tracker.ingest(&record(2, vec![Probe::new("B", false, true)]));
        let out = tracker.finalize();

        assert_eq!(out[0].site, "A");
        assert_eq!(out[1].site, "B");
        let a = intervals_for(&out, "A");
        let b = intervals_for(&out, "B");
        assert_eq!((a[0].start, a[0].end), (ts(0), Some(ts(1))));
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].start, ts(1));
        assert!(b[0].is_ongoing());
    }

    #[test]
    fn test_error_only_site_is_still_listed() {
        let out = run(ClosePolicy::default(), &[(0, "B", true, true), (1, "A", false, true)]);
        let sites: Vec<_> = out.iter().map(|s| s.site.as_str()).collect();
        assert_eq!(sites, vec!["B", "A"]);
    }
}
