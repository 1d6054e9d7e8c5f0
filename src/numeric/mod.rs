// ============================================================================
// Numeric Module
// Error vocabulary shared by every calculator backend
// ============================================================================
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no silent wrapping)

mod errors;

pub use errors::{NumericError, NumericResult};
