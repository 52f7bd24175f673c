use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use availwatch::data::ClosePolicy;
use availwatch::{logging, report, DisplayZone, OutputFormat, ReportConfig, ReportError};

#[derive(Parser, Debug)]
#[command(name = "availwatch")]
#[command(about = "Summarize site availability from a probe log")]
struct Args {
    /// Path to the newline-delimited JSON probe log
    file: Option<PathBuf>,

    /// Config file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display zone for timestamps: "utc", "local", an offset like "+02:00" or an IANA name like "Europe/Warsaw"
    #[arg(short, long)]
    zone: Option<DisplayZone>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the last success / last available columns
    #[arg(long)]
    no_timestamps: bool,

    /// Skip malformed lines instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// End intervals at the last available probe instead of the first unavailable one
    #[arg(long)]
    close_at_last_available: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(zone) = self.zone {
            config.display_zone = zone;
        }
        if let Some(format) = self.format {
            config.output = format;
        }
        if self.no_timestamps {
            config.include_timestamps = false;
        }
        if self.skip_invalid {
            config.skip_invalid = true;
        }
        if self.close_at_last_available {
            config.close_policy = ClosePolicy::LastAvailable;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(path) = args.file.as_deref() else {
        return Err(ReportError::MissingInput.into());
    };

    logging::init_cli(args.verbose);

    let config = args.apply(ReportConfig::load(args.config.as_deref())?);
    let output = report::run(path, &config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
