//! Tracing bootstrap.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps a `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Priority: `RUST_LOG` > verbosity > info. Output goes to stderr so that
/// results on stdout stay machine-readable. Returns `false` if a subscriber
/// was already installed.
pub fn init_tracing(verbosity: u8) -> bool {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_directive(verbosity))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .try_init()
        .is_ok()
}
