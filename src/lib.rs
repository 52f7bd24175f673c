//! # availwatch
//!
//! A batch report generator for site availability probe logs.
//!
//! A probe log is newline-delimited JSON, one record per probe run:
//!
//! ```text
//! {"timestamp": "2024-06-03T10:00:00Z", "availability": [
//!     {"siteName": "canon", "error": false, "available": true}, ...]}
//! ```
//!
//! The crate reads such a log once and produces per-site summary counters
//! and the contiguous periods during which each site was available.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                            report                              │
//! │  ┌─────────┐     ┌──────────────────────┐     ┌─────────────┐  │
//! │  │ source  │────▶│ data                 │────▶│ render      │  │
//! │  │ (input) │     │  StatsAggregator     │     │  stats/     │  │
//! │  └─────────┘     │  IntervalTracker     │     │  intervals  │  │
//! │                  └──────────────────────┘     └─────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: the [`RecordSource`] trait with file, line and
//!   in-memory implementations
//! - **[`data`]**: single-pass per-site aggregation and interval
//!   reconstruction
//! - **[`render`]**: the generic text table renderer, timestamp formatting
//!   and the report views
//! - **[`report`]**: drives one pass over a source and renders the result
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! availwatch availability_metrics.txt
//! availwatch --zone +02:00 --format json availability_metrics.txt
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::io::Cursor;
//! use availwatch::{LineSource, Report, ReportConfig};
//!
//! let log = r#"{"timestamp":"2024-06-03T10:00:00Z","availability":[{"siteName":"canon","error":false,"available":true}]}"#;
//! let mut source = LineSource::new(Cursor::new(log), "inline");
//! let config = ReportConfig::default();
//!
//! let report = Report::collect(&mut source, &config).unwrap();
//! assert_eq!(report.stats.get("canon").unwrap().availables, 1);
//! print!("{}", report.render(&config).unwrap());
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod render;
pub mod report;
pub mod source;

pub use config::{OutputFormat, ReportConfig};
pub use data::{
    AvailabilityInterval, ClosePolicy, IntervalTracker, SiteIntervals, SiteStats,
    StatsAggregator, StatsSummary,
};
pub use error::ReportError;
pub use render::DisplayZone;
pub use report::Report;
pub use source::{FileSource, LineSource, Probe, Record, RecordSource, VecSource};
