//! Text and JSON rendering of finalized reports.
//!
//! - [`table`]: generic variable-height text table
//! - [`timefmt`]: timestamp and interval formatting in a [`DisplayZone`]
//! - [`views`]: the stats and availability tables, plus the JSON dump

pub mod table;
pub mod timefmt;
pub mod views;

pub use table::{Cell, Row};
pub use timefmt::{format_interval, format_timestamp, DisplayZone, ABSENT_MARKER};
