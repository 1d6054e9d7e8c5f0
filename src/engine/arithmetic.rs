// ============================================================================
// Arithmetic Operations
// add / subtract / multiply / sum over money values
// ============================================================================

use super::scale::{normalize_all, normalize_pair, widened_scale};
use crate::calculator::Calculator;
use crate::domain::{Money, MoneyResult, Ratio};
use crate::guards::{assert_non_empty, assert_same_currencies, assert_same_currency, assert_same_scale};

impl<C: Calculator> Money<C> {
    /// Sum of two values of the same currency.
    ///
    /// The result sits at the larger of the two scales.
    ///
    /// # Errors
    /// `DifferentCurrency` when the codes differ.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        let (a, b, scale) = normalize_pair(self, other)?;
        Ok(self.rewrap(self.calculator.add(&a, &b)?, scale))
    }

    /// Difference of two values of the same currency.
    ///
    /// # Errors
    /// `DifferentCurrency` when the codes differ.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        let (a, b, scale) = normalize_pair(self, other)?;
        Ok(self.rewrap(self.calculator.subtract(&a, &b)?, scale))
    }

    /// [`add`](Self::add) without normalization.
    ///
    /// # Errors
    /// `DifferentCurrency` or `DifferentScale`.
    pub fn add_strict(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        assert_same_scale(self, other)?;
        Ok(self.rewrap(self.calculator.add(&self.amount, &other.amount)?, self.scale))
    }

    /// [`subtract`](Self::subtract) without normalization.
    ///
    /// # Errors
    /// `DifferentCurrency` or `DifferentScale`.
    pub fn subtract_strict(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        assert_same_scale(self, other)?;
        Ok(self.rewrap(
            self.calculator.subtract(&self.amount, &other.amount)?,
            self.scale,
        ))
    }

    /// Multiply by an exact factor.
    ///
    /// A factor of `Ratio { amount: 21, scale: 1 }` means 2.1; the result
    /// scale is `self.scale() + factor.scale` so nothing is ever rounded.
    /// Use [`transform_scale`](Self::transform_scale) afterwards to narrow
    /// with an explicit rounding mode.
    pub fn multiply(&self, factor: impl Into<Ratio<C::Amount>>) -> MoneyResult<Self> {
        let factor = factor.into();
        let scale = widened_scale(self.scale, factor.scale)?;
        let amount = self.calculator.multiply(&self.amount, &factor.amount)?;
        Ok(self.rewrap(amount, scale))
    }

    /// Sum of every value, at the largest scale present.
    ///
    /// # Errors
    /// `EmptyInput` for an empty slice (there is no currency to fall back on),
    /// `DifferentCurrency` when the codes are mixed.
    pub fn sum(values: &[Self]) -> MoneyResult<Self> {
        assert_non_empty(values, "sum")?;
        assert_same_currencies(values)?;

        let first = &values[0];
        let calc = &first.calculator;
        let (amounts, scale) = normalize_all(values)?;

        let mut total = calc.zero();
        for amount in &amounts {
            total = calc.add(&total, amount)?;
        }
        Ok(first.rewrap(total, scale))
    }
}
