//! Report views built from finalized data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::table::{self, Cell, Row};
use super::timefmt::{format_interval, format_timestamp, DisplayZone};
use crate::data::{SiteIntervals, StatsSummary};
use crate::error::ReportError;

/// Header of the full summary table.
pub const STATS_HEADER: [&str; 7] = [
    "Site",
    "Invocations",
    "Successes",
    "Last success",
    "Errors",
    "Availables",
    "Last available",
];

/// Header of the summary table without timestamp columns.
pub const STATS_HEADER_COMPACT: [&str; 5] =
    ["Site", "Invocations", "Successes", "Errors", "Availables"];

pub const INTERVALS_HEADER: [&str; 2] = ["Site", "Availability periods"];

/// Render the per-site summary table.
pub fn stats_table(
    summary: &StatsSummary,
    zone: DisplayZone,
    include_timestamps: bool,
) -> Result<String, ReportError> {
    let rows: Vec<Row> = summary
        .sites
        .iter()
        .map(|(site, s)| {
            if include_timestamps {
                vec![
                    Cell::from(site.as_str()),
                    Cell::from(s.invocations),
                    Cell::from(s.successes),
                    Cell::from(format_timestamp(s.last_success, zone)),
                    Cell::from(s.errors),
                    Cell::from(s.availables),
                    Cell::from(format_timestamp(s.last_available, zone)),
                ]
            } else {
                vec![
                    Cell::from(site.as_str()),
                    Cell::from(s.invocations),
                    Cell::from(s.successes),
                    Cell::from(s.errors),
                    Cell::from(s.availables),
                ]
            }
        })
        .collect();

    if include_timestamps {
        table::render(&STATS_HEADER, &rows)
    } else {
        table::render(&STATS_HEADER_COMPACT, &rows)
    }
}

/// Render the availability periods table, newest period first.
pub fn intervals_table(sites: &[SiteIntervals], zone: DisplayZone) -> Result<String, ReportError> {
    let rows: Vec<Row> = sites
        .iter()
        .map(|site| {
            let periods: Vec<String> =
                site.newest_first().map(|i| format_interval(i, zone)).collect();
            vec![Cell::from(site.site.as_str()), Cell::from(periods)]
        })
        .collect();
    table::render(&INTERVALS_HEADER, &rows)
}

#[derive(Debug, Serialize)]
struct StatsDump<'a> {
    records: u64,
    latest_timestamp: Option<DateTime<Utc>>,
    sites: Vec<SiteDump<'a>>,
}

#[derive(Debug, Serialize)]
struct SiteDump<'a> {
    site: &'a str,
    invocations: u64,
    successes: u64,
    errors: u64,
    availables: u64,
    last_success: Option<DateTime<Utc>>,
    last_available: Option<DateTime<Utc>>,
}

/// Dump the aggregated counters as pretty JSON, sites in first-seen order.
pub fn stats_json(summary: &StatsSummary) -> Result<String, ReportError> {
    let dump = StatsDump {
        records: summary.records,
        latest_timestamp: summary.latest_timestamp,
        sites: summary
            .sites
            .iter()
            .map(|(site, s)| SiteDump {
                site: site.as_str(),
                invocations: s.invocations,
                successes: s.successes,
                errors: s.errors,
                availables: s.availables,
                last_success: s.last_success,
                last_available: s.last_available,
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&dump)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AvailabilityInterval, SiteStats};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, h, m, 0).unwrap()
    }

    fn summary() -> StatsSummary {
        StatsSummary {
            sites: vec![
                (
                    "canon".to_string(),
                    SiteStats {
                        invocations: 3,
                        successes: 2,
                        errors: 1,
                        availables: 1,
                        last_success: Some(at(9, 0)),
                        last_available: Some(at(8, 0)),
                    },
                ),
                (
                    "fotoplus".to_string(),
                    SiteStats {
                        invocations: 1,
                        errors: 1,
                        ..SiteStats::default()
                    },
                ),
            ],
            records: 3,
            latest_timestamp: Some(at(9, 0)),
        }
    }

    #[test]
    fn test_stats_table() {
        let out = stats_table(&summary(), DisplayZone::Utc, true).unwrap();
        let expected = "\
--------------------------------------------------------------------------------------------------------
| Site     | Invocations | Successes | Last success        | Errors | Availables | Last available      |
--------------------------------------------------------------------------------------------------------
| canon    | 3           | 2         | 2024-06-03 09:00:00 | 1      | 1          | 2024-06-03 08:00:00 |
| fotoplus | 1           | 0         | None                | 1      | 0          | None                |
--------------------------------------------------------------------------------------------------------
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_stats_table_without_timestamps() {
        let out = stats_table(&summary(), DisplayZone::Utc, false).unwrap();
        let header = out.lines().nth(1).unwrap();
        assert_eq!(header, "| Site     | Invocations | Successes | Errors | Availables |");
        assert!(!out.contains("None"));
    }

    #[test]
    fn test_intervals_table_newest_first() {
        let sites = vec![
            SiteIntervals {
                site: "canon".to_string(),
                intervals: vec![
                    AvailabilityInterval {
                        site: "canon".to_string(),
                        start: at(8, 0),
                        end: Some(at(8, 30)),
                    },
                    AvailabilityInterval {
                        site: "canon".to_string(),
                        start: at(9, 15),
                        end: None,
                    },
                ],
            },
            SiteIntervals {
                site: "fotoplus".to_string(),
                intervals: vec![],
            },
        ];
        let out = intervals_table(&sites, DisplayZone::Utc).unwrap();
        let expected = "\
------------------------------------------
| Site     | Availability periods        |
------------------------------------------
| canon    | 09:15 - present, 2024-06-03 |
|          | 08:00 - 08:30, 2024-06-03   |
| fotoplus |                             |
------------------------------------------
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_summary_renders_headers() {
        let out = stats_table(&StatsSummary::default(), DisplayZone::Utc, true).unwrap();
        assert_eq!(out.lines().count(), 4);
        let out = intervals_table(&[], DisplayZone::Utc).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_stats_json() {
        let json = stats_json(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"], 3);
        assert_eq!(value["latest_timestamp"], "2024-06-03T09:00:00Z");
        assert_eq!(value["sites"][0]["site"], "canon");
        assert_eq!(value["sites"][0]["availables"], 1);
        assert_eq!(value["sites"][1]["site"], "fotoplus");
        assert!(value["sites"][1]["last_success"].is_null());
    }
}
