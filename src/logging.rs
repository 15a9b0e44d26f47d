//! Logging init: human-readable lines on stdout.
//!
//! Stdout is the tool's progress stream (CI logs capture it), so the
//! subscriber writes there rather than to a file.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stdout. `RUST_LOG` overrides the default
/// filter. Safe to call once per process; later calls are ignored.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,urlwait=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .try_init();
}
