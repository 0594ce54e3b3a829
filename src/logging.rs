//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays reserved for
//! progress output (human or NDJSON). `RUST_LOG` takes precedence over the
//! verbosity-derived default.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Default level for a verbosity setting.
pub fn level_for(verbosity: Verbosity) -> Level {
    match verbosity {
        Verbosity::Quiet => Level::ERROR,
        Verbosity::Normal => Level::WARN,
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug => Level::DEBUG,
    }
}

/// Map repeated `-v` flags onto a verbosity, never below `base`.
pub fn verbosity_from_flags(base: Verbosity, verbose: u8) -> Verbosity {
    let from_flags = match verbose {
        0 => Verbosity::Quiet,
        1 => Verbosity::Verbose,
        _ => Verbosity::Debug,
    };
    base.max(from_flags)
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
