//! Developer logging

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
