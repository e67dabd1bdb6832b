use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive variable, the only environment variable a fixture reads.
/// Logging is off unless it is set, so fixtures keep standard error silent
/// by default. It never affects the stdout trace.
pub const LOG_ENV: &str = "FIXTURE_LOG";

/// Installs a stderr subscriber filtered by `FIXTURE_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    // Only fails when a subscriber is already set, which is fine.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
