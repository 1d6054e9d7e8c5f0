// ============================================================================
// Utilities Module
// Helpers for applications embedding the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, is_logging_initialized};
