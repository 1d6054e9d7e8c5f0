// ============================================================================
// Domain Models Module
// Value objects, currency records and the error vocabulary
// ============================================================================

pub mod config;
pub mod currency;
pub mod errors;
pub mod money;

pub use config::FactoryConfig;
pub use currency::{iso4217, Currency};
pub use errors::{MoneyError, MoneyResult};
pub use money::{Money, MoneySnapshot, Ratio};
