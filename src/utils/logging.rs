// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests (feature "logging")
// ============================================================================
//
// The library itself only emits `tracing` events:
// - warn: clock moved backwards, identifier sequence exhausted
// - debug: identifier sequence reset after a busy millisecond
//
// `RUST_LOG` selects what is shown, default `warn`:
//     RUST_LOG=trade_helpers=debug cargo test --features logging
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Whether [`init_logging`] has installed a subscriber.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set (by this function
/// or by someone else); calling it more than once is harmless.
pub fn init_logging() -> bool {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if !installed {
        LOGGING_INITIALIZED.store(false, Ordering::SeqCst);
    }
    installed
}
