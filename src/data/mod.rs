//! Streaming aggregation over probe records.
//!
//! Both components consume the same record sequence once, in arrival order,
//! and own their per-site state until finalized.
//!
//! ## Submodules
//!
//! - [`stats`]: running counters per site ([`StatsAggregator`], [`SiteStats`])
//! - [`intervals`]: availability interval reconstruction ([`IntervalTracker`])
//!
//! ## Data Flow
//!
//! ```text
//! Record
//!   │
//!   ├──▶ StatsAggregator::ingest()  ──▶ finalize() ──▶ StatsSummary
//!   │
//!   └──▶ IntervalTracker::ingest()  ──▶ finalize() ──▶ Vec<SiteIntervals>
//! ```

pub mod intervals;
pub mod stats;

pub use intervals::{AvailabilityInterval, ClosePolicy, IntervalTracker, SiteIntervals};
pub use stats::{SiteStats, StatsAggregator, StatsSummary};
