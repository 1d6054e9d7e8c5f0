// ============================================================================
// Scale Normalizer
// Aligns values to a common scale before they are combined
// ============================================================================

use crate::calculator::Calculator;
use crate::domain::{Money, MoneyError, MoneyResult};
use crate::numeric::NumericError;

/// `base^delta` as a backend amount.
pub(crate) fn scale_factor<C: Calculator>(calculator: &C, base: u32, delta: u32) -> MoneyResult<C::Amount> {
    let base = calculator.from_i64(i64::from(base))?;
    Ok(calculator.power(&base, delta)?)
}

/// `scale + extra`, failing instead of wrapping past `u32::MAX`.
pub(crate) fn widened_scale(scale: u32, extra: u32) -> MoneyResult<u32> {
    scale.checked_add(extra).ok_or_else(|| {
        tracing::debug!(scale, extra, "scale overflow");
        MoneyError::Arithmetic(NumericError::Overflow)
    })
}

/// Amount of `money` re-expressed at `target`, which must not be below its scale.
pub(crate) fn amount_at_scale<C: Calculator>(money: &Money<C>, target: u32) -> MoneyResult<C::Amount> {
    debug_assert!(target >= money.scale, "normalization never lowers a scale");

    if target == money.scale {
        return Ok(money.amount.clone());
    }

    let calc = &money.calculator;
    let factor = scale_factor(calc, money.currency.base, target - money.scale)?;
    Ok(calc.multiply(&money.amount, &factor)?)
}

/// Amounts of `a` and `b` at the larger of their two scales.
pub(crate) fn normalize_pair<C: Calculator>(
    a: &Money<C>,
    b: &Money<C>,
) -> MoneyResult<(C::Amount, C::Amount, u32)> {
    let scale = a.scale.max(b.scale);
    if a.scale != b.scale {
        tracing::trace!(left = a.scale, right = b.scale, scale, "normalizing pair");
    }
    Ok((amount_at_scale(a, scale)?, amount_at_scale(b, scale)?, scale))
}

/// Amounts of every value at the largest scale present.
pub(crate) fn normalize_all<C: Calculator>(values: &[Money<C>]) -> MoneyResult<(Vec<C::Amount>, u32)> {
    let scale = values.iter().map(|v| v.scale).max().unwrap_or(0);
    let amounts = values
        .iter()
        .map(|v| amount_at_scale(v, scale))
        .collect::<MoneyResult<Vec<_>>>()?;
    Ok((amounts, scale))
}

impl<C: Calculator> Money<C> {
    /// Bring every value to the largest scale present.
    ///
    /// Normalization only ever raises scales, so it is lossless: each output
    /// represents exactly the same magnitude as its input.
    pub fn normalize_scale(values: &[Money<C>]) -> MoneyResult<Vec<Money<C>>> {
        let (amounts, scale) = normalize_all(values)?;
        Ok(values
            .iter()
            .zip(amounts)
            .map(|(value, amount)| value.rewrap(amount, scale))
            .collect())
    }
}
