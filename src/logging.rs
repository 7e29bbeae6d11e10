//! Tracing subscriber setup for the binary.

use crate::config;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays clean for results.
///
/// `verbose` forces `debug` regardless of the environment filter.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config::get_log_level()
    };

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| {
        eprintln!("Invalid log filter '{level}', falling back to '{}'", config::DEFAULT_LOG_LEVEL);
        EnvFilter::new(config::DEFAULT_LOG_LEVEL)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();

    match installed {
        Ok(()) => tracing::debug!("Tracing initialized with filter '{}'", level),
        // Reaches whichever subscriber is already installed, if any
        Err(e) => tracing::debug!("Tracing subscriber not installed: {}", e),
    }
}
