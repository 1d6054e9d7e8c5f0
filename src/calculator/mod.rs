// ============================================================================
// Calculator Module
// Pluggable numeric backends behind a single arithmetic contract
// ============================================================================

mod bigint;
mod decimal;
mod native;
mod traits;

pub use bigint::BigIntCalculator;
pub use decimal::DecimalCalculator;
pub use native::{I128Calculator, I64Calculator};
pub use traits::Calculator;
