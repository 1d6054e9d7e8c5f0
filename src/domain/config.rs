// ============================================================================
// Factory Configuration
// Defaults applied when constructing money values
// ============================================================================

use super::currency::Currency;
use super::errors::{MoneyError, MoneyResult};
use crate::guards::assert_valid_scale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`MoneyFactory`](crate::engine::MoneyFactory).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactoryConfig {
    /// Currency used when a construction request names none.
    /// None means every request must carry its own currency.
    pub default_currency: Option<Currency>,

    /// Scale used when a construction request names none.
    /// None means the currency's exponent.
    pub default_scale: Option<i64>,
}

impl FactoryConfig {
    /// Configuration with no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the default currency
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = Some(currency);
        self
    }

    /// Builder method: Set the default scale
    pub fn with_default_scale(mut self, scale: i64) -> Self {
        self.default_scale = Some(scale);
        self
    }

    /// Validate the configuration, returning the checked default scale.
    pub fn validate(&self) -> MoneyResult<Option<u32>> {
        if let Some(currency) = &self.default_currency {
            if currency.code.is_empty() {
                return Err(MoneyError::InvalidConfig(
                    "default currency code cannot be empty".to_string(),
                ));
            }
        }

        self.default_scale.map(assert_valid_scale).transpose()
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Defaults for a single-currency ledger at the currency's natural scale.
    pub fn for_currency(currency: Currency) -> Self {
        Self::new().with_default_currency(currency)
    }
}
