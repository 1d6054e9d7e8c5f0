// ============================================================================
// Money Value Object
// Immutable amount/currency/scale triple bound to one calculator
// ============================================================================

use super::currency::Currency;
use crate::calculator::Calculator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact monetary value.
///
/// `amount` is an integral count of minor units at `scale` digits of
/// precision: amount 1050 at scale 2 is 10.50. The scale can sit above or
/// below the currency's natural exponent.
///
/// Values are immutable. Every operation returns a new `Money`; construction
/// goes through [`MoneyFactory`](crate::engine::MoneyFactory), which runs the
/// amount and scale guards.
///
/// `PartialEq` is structural (same amount, currency and scale). Use
/// [`Money::equal`] for the scale-aware comparison where `10.5` at scale 1
/// equals `10.50` at scale 2.
#[derive(Clone)]
pub struct Money<C: Calculator> {
    pub(crate) amount: C::Amount,
    pub(crate) currency: Currency,
    pub(crate) scale: u32,
    pub(crate) calculator: C,
}

impl<C: Calculator> Money<C> {
    /// Wrap already-validated parts.
    pub(crate) fn from_parts(calculator: C, amount: C::Amount, currency: Currency, scale: u32) -> Self {
        Self {
            amount,
            currency,
            scale,
            calculator,
        }
    }

    /// New value sharing this one's currency and calculator.
    pub(crate) fn rewrap(&self, amount: C::Amount, scale: u32) -> Self {
        Self::from_parts(self.calculator.clone(), amount, self.currency.clone(), scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> &C::Amount {
        &self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Calculator this value was created with.
    #[inline]
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Plain, calculator-independent view of this value.
    pub fn to_snapshot(&self) -> MoneySnapshot<C::Amount> {
        MoneySnapshot {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            scale: self.scale,
        }
    }

    /// Consume the value into its snapshot.
    pub fn into_snapshot(self) -> MoneySnapshot<C::Amount> {
        MoneySnapshot {
            amount: self.amount,
            currency: self.currency,
            scale: self.scale,
        }
    }
}

impl<C: Calculator> PartialEq for Money<C> {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.currency == other.currency && self.amount == other.amount
    }
}

impl<C: Calculator> fmt::Debug for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amount)
            .field("currency", &self.currency.code)
            .field("scale", &self.scale)
            .field("calculator", &self.calculator.name())
            .finish()
    }
}

impl<C: Calculator> fmt::Display for Money<C> {
    /// Renders `10.50 USD`, or `1050e-2 MGA` for non-decimal currencies.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(decimal) => write!(f, "{} {}", decimal, self.currency),
            Err(_) => write!(f, "{}e-{} {}", self.amount, self.scale, self.currency),
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Serializable `{amount, currency, scale}` record.
///
/// Rebuild a [`Money`] from it with
/// [`MoneyFactory::from_snapshot`](crate::engine::MoneyFactory::from_snapshot),
/// which re-runs the construction guards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneySnapshot<A> {
    pub amount: A,
    pub currency: Currency,
    pub scale: u32,
}

// ============================================================================
// Ratio
// ============================================================================

/// Integral weight or factor with its own scale.
///
/// Represents `amount / base^scale`, where `base` is the base of the currency
/// it is applied to. `Ratio { amount: 21, scale: 1 }` is 2.1 for a decimal
/// currency. Plain amounts convert into a ratio at scale 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ratio<A> {
    pub amount: A,
    pub scale: u32,
}

impl<A> Ratio<A> {
    pub fn new(amount: A, scale: u32) -> Self {
        Self { amount, scale }
    }
}

impl<A> From<A> for Ratio<A> {
    fn from(amount: A) -> Self {
        Self { amount, scale: 0 }
    }
}
