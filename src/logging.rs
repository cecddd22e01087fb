//! Logging setup for bots built on the reaper
//!
//! The library itself only emits `tracing` events. A bot calls `init_logging`
//! once at startup to print them.

use tracing_subscriber::EnvFilter;

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// # Arguments
///
/// * `verbose` - Verbosity count (0 = info, 1 = debug, 2 = trace, 3+ = everything)
/// * `quiet` - Only show errors; takes precedence over `verbose`
///
/// # Returns
///
/// An error if a global subscriber was already installed
pub fn init_logging(
    verbose: u8,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose, quiet))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .try_init()
}

fn filter_for(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::new("reddit_reaper=info,warn"),
        1 => EnvFilter::new("reddit_reaper=debug,info"),
        2 => EnvFilter::new("reddit_reaper=trace,debug"),
        _ => EnvFilter::new("trace"),
    }
}
