//! Log setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Filtering comes from `RUST_LOG`, defaulting to warnings. Logs go to
/// stderr so they never mix with the table on stdout.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
