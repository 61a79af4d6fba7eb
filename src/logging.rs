//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout keeps only the single result line. Quiet unless `--verbose`.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::util::SubscriberInitExt;

/// Max level for the given verbosity
pub fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed; the existing one is kept.
pub fn init(verbose: bool) -> bool {
    FmtSubscriber::builder()
        .with_max_level(max_level(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .try_init()
        .is_ok()
}
