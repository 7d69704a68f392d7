//! Tracing subscriber setup for the binary

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `-v` nor `RUST_LOG` is given
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber.
///
/// `verbose` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to warnings.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(Level::DEBUG.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
