//! Logging initialization for the drover binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Logs are structured JSON on stderr so they never interleave with the
/// tool's stdout output. In quiet mode (the default for the CLI) only
/// errors are emitted; `--verbose` lowers the threshold to info.
/// `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // try_init so tests that initialize twice don't panic
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
