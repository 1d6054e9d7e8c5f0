// ============================================================================
// Logging Setup
// Installs a tracing subscriber so guard and engine events become visible
// ============================================================================
//
// The library itself only emits `tracing` events. Binaries and tests that
// want to see them call `init_logging` once; the filter comes from
// `RUST_LOG` when set, otherwise from the given default directive.

use crate::domain::{MoneyError, MoneyResult};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Whether [`init_logging`] has already installed a subscriber.
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Install a global fmt subscriber filtered by `RUST_LOG` or `default_directive`.
///
/// Calling it again after a successful install is a no-op.
///
/// # Errors
/// `InvalidConfig` when the directive does not parse or another global
/// subscriber is already installed.
pub fn init_logging(default_directive: &str) -> MoneyResult<()> {
    if is_logging_initialized() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|e| MoneyError::InvalidConfig(format!("log filter {default_directive:?}: {e}")))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| MoneyError::InvalidConfig(format!("failed to install subscriber: {e}")))?;

    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(directive = default_directive, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        // Another test binary may already own the global subscriber.
        if init_logging("dinero=debug").is_ok() {
            assert!(is_logging_initialized());
            assert!(init_logging("dinero=trace").is_ok());
        }
    }
}
