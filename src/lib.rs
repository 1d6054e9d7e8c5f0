// ============================================================================
// Dinero Library
// Exact monetary arithmetic over pluggable integer backends
// ============================================================================

//! # Dinero
//!
//! Immutable money values whose amounts are integral minor units at an
//! explicit scale, with every operation checked and exact.
//!
//! ## Features
//!
//! - **Pluggable calculators** (`i64`, `i128`, `rust_decimal`, `num-bigint`)
//! - **Guards first**: currency and scale mismatches surface as typed errors
//! - **Scale normalization** that only ever raises precision
//! - **Largest-remainder allocation** with a deterministic index tie-break
//! - **Explicit rounding** when narrowing a scale
//!
//! ## Example
//!
//! ```rust
//! use dinero::prelude::*;
//!
//! let factory = MoneyFactoryBuilder::new(I64Calculator)
//!     .default_currency(iso4217::USD)
//!     .build()
//!     .unwrap();
//!
//! let bill = factory.create(MoneyOptions::new(100).scale(0)).unwrap();
//! let shares = bill.allocate(&[1i64, 1, 1]).unwrap();
//! let amounts: Vec<i64> = shares.iter().map(|m| *m.amount()).collect();
//! assert_eq!(amounts, vec![34, 33, 33]);
//!
//! let total = Money::sum(&shares).unwrap();
//! assert!(total.equal(&bill).unwrap());
//! ```

pub mod calculator;
pub mod domain;
pub mod engine;
pub mod guards;
pub mod numeric;
pub mod utils;

pub use domain::{Currency, Money, MoneyError, MoneyResult, MoneySnapshot, Ratio};

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{
        BigIntCalculator, Calculator, DecimalCalculator, I128Calculator, I64Calculator,
    };
    pub use crate::domain::{
        iso4217, Currency, FactoryConfig, Money, MoneyError, MoneyResult, MoneySnapshot, Ratio,
    };
    pub use crate::engine::{
        allocate, create_from_config, MoneyFactory, MoneyFactoryBuilder, MoneyOptions,
        RoundingMode,
    };
    pub use crate::numeric::NumericError;
}
