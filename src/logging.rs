//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout carries only the report. The level is
//! controlled by `RUST_LOG` (default: `warn`, or `debug` when verbose).

use tracing_subscriber::EnvFilter;

/// Initialise console logging for the CLI.
pub fn init_cli(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
