//! Logging and tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// The log level for a given number of `-v` flags.
pub fn level_for_verbosity(occurrences: u64) -> &'static str {
    match occurrences {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber at `level`.  `RUST_LOG`, when set,
/// wins over the level passed in.
pub fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
