//! Crate-standard logging setup.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that writes formatted events to stderr.
///
/// `level` is any `EnvFilter` directive (`info`, `wm_core=debug`, ...). A `RUST_LOG` value in the
/// environment takes precedence. Calling this more than once is harmless; later calls are
/// ignored.
pub fn setup(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
