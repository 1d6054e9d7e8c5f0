// ============================================================================
// Engine Module
// Money operations layered on top of a pluggable calculator
// ============================================================================

mod arithmetic;
mod comparison;
mod conversion;
mod rounding;
mod scale;

pub mod allocator;
pub mod factory;

pub use allocator::allocate;
pub use factory::{create_from_config, MoneyFactory, MoneyFactoryBuilder, MoneyOptions};
pub use rounding::RoundingMode;
