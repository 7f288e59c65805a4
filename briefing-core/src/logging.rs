use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "BRIEFING_LOG";

/// Install the stderr subscriber. stdout stays reserved for tool output.
///
/// `BRIEFING_LOG` takes precedence; otherwise `verbose` selects `debug`, and
/// without it logging is off so a failure stays a single stderr line.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "off" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second call (tests) leaves the first subscriber in place.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
