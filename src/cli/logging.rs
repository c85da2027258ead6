use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::Result;

const DEFAULT_FILTER: &str = "warn";

// Build the filter for `--log-level`. An unparsable directive falls back
// to the default rather than refusing to run.
pub(crate) fn filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// Install a subscriber that writes human-readable events to stderr.
// Stdout carries command output only.
#[cfg(not(tarpaulin_include))]
pub(crate) fn init(directive: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
