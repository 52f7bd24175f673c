//! Report configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a config
//! file (TOML, JSON or YAML, chosen by extension):
//!
//! ```toml
//! display_zone = "+02:00"
//! output = "table"
//! include_timestamps = true
//! skip_invalid = false
//! close_policy = "first_unavailable"
//! ```

use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use crate::data::ClosePolicy;
use crate::error::ReportError;
use crate::render::DisplayZone;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Stats table followed by the availability periods table.
    #[default]
    Table,
    /// Aggregated counters as JSON, without intervals.
    Json,
}

/// Options for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub display_zone: DisplayZone,
    pub output: OutputFormat,
    /// Show `Last success` / `Last available` columns in the stats table.
    pub include_timestamps: bool,
    /// Skip malformed lines instead of aborting the run.
    pub skip_invalid: bool,
    pub close_policy: ClosePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            display_zone: DisplayZone::default(),
            output: OutputFormat::default(),
            include_timestamps: true,
            skip_invalid: false,
            close_policy: ClosePolicy::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ReportError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ReportError::Config(format!("{}: {}", path.display(), e)))
    }
}
