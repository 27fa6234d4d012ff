//! Optional `tracing` subscriber setup.
//!
//! The validators only emit events; installing a subscriber is left to the
//! binary embedding this crate. [`init_logging`] is a convenience for
//! binaries and tests that want output on stderr.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "workspace_binding=info";

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, which is
/// not an error; the existing one keeps receiving events.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

