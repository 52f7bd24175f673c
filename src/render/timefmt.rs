//! Timestamp display formatting.
//!
//! Instants are stored in UTC and only converted to the display zone here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::data::AvailabilityInterval;

/// Shown in place of a timestamp that was never observed.
pub const ABSENT_MARKER: &str = "None";

/// Zone in which timestamps are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayZone {
    #[default]
    Utc,
    /// The zone of the machine running the report.
    Local,
    Fixed(FixedOffset),
    /// An IANA zone such as `Europe/Warsaw`, following its DST rules.
    Named(Tz),
}

impl DisplayZone {
    /// Wall-clock time of `instant` in this zone.
    pub fn wall_clock(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            DisplayZone::Utc => instant.naive_utc(),
            DisplayZone::Local => instant.with_timezone(&Local).naive_local(),
            DisplayZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    /// Accepts `utc`, `local`, an offset such as `+02:00`, or an IANA zone
    /// name such as `Europe/Warsaw`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "utc" | "z" => return Ok(DisplayZone::Utc),
            "local" => return Ok(DisplayZone::Local),
            _ => {}
        }
        if let Ok(offset) = s.parse::<FixedOffset>() {
            return Ok(DisplayZone::Fixed(offset));
        }
        s.parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|_| format!("unknown display zone: {s}"))
    }
}

impl TryFrom<String> for DisplayZone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Utc => write!(f, "utc"),
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Fixed(offset) => write!(f, "{offset}"),
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Format a scalar timestamp as `YYYY-MM-DD HH:MM:SS`, or the absent marker.
pub fn format_timestamp(instant: Option<DateTime<Utc>>, zone: DisplayZone) -> String {
    match instant {
        Some(instant) => zone.wall_clock(instant).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ABSENT_MARKER.to_string(),
    }
}

/// Format an interval for the availability table.
///
/// - same day: `HH:MM - HH:MM, YYYY-MM-DD`
/// - spanning days: `YYYY-MM-DD HH:MM - YYYY-MM-DD HH:MM`
/// - ongoing: `HH:MM - present, YYYY-MM-DD` (start date)
///
/// Day boundaries are taken in the display zone.
pub fn format_interval(interval: &AvailabilityInterval, zone: DisplayZone) -> String {
    let start = zone.wall_clock(interval.start);
    match interval.end.map(|end| zone.wall_clock(end)) {
        None => format!("{} - present, {}", start.format("%H:%M"), start.format("%Y-%m-%d")),
        Some(end) if end.date() == start.date() => format!(
            "{} - {}, {}",
            start.format("%H:%M"),
            end.format("%H:%M"),
            start.format("%Y-%m-%d")
        ),
        Some(end) => format!(
            "{} - {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        ),
    }
}
