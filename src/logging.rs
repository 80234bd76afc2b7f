use std::io;

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries converted data, keep diagnostics off it.
    // try_init only errs when a subscriber is already installed, keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
