//! Logger setup for the demo binary and for tests that want log output.

use env_logger::{Builder, Env};

/// Install `env_logger` with `debug` (verbose) or `info` as the default
/// filter. `RUST_LOG` takes precedence. Later calls keep the first logger.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter)).try_init();
}
