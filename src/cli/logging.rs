//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for `--json` output.
//!
//! # Log Levels
//!
//! - `warn`: default; unknown facet values, stale or failed responses
//! - `info`: result counts
//! - `debug` (`-v`): session transitions, file loading
//! - `trace` (`-vv`): everything

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("refine={}", level_for(verbosity).as_str().to_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
