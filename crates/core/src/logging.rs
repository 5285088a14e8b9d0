use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "spending_dashboard_core=info";

static TRACING_INIT: Once = Once::new();

/// Install a global fmt subscriber honouring `RUST_LOG`.
///
/// Meant for binaries and tests embedding the core; the library itself only
/// emits events. Safe to call more than once, and a no-op if another
/// subscriber is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
        {
            tracing::info!("spending dashboard tracing initialized");
        }
    });
}
