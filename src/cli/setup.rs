//! Setup and initialization functions for CLI

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `-v` says otherwise
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, logging to stderr
///
/// `RUST_LOG` wins over `-v` so individual modules can be tuned.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: logging already configured: {}", e);
    }
}
