// ============================================================================
// Allocator
// Splits an amount across weighted shares without losing a single unit
// ============================================================================

use super::scale::{scale_factor, widened_scale};
use crate::calculator::Calculator;
use crate::domain::{Money, MoneyError, MoneyResult, Ratio};
use crate::guards::assert_valid_ratios;
use std::cmp::Ordering;

/// Largest-remainder allocation of `amount` over `ratios`.
///
/// Each share starts at `amount * r / total` (truncated). The units lost to
/// truncation are handed out one at a time to the shares with the largest
/// remainders; equal remainders go to the earlier index. The result always
/// sums to `amount` exactly and zero ratios always receive zero.
///
/// Negative amounts are split by magnitude and negated, so the same rule
/// applies symmetrically.
///
/// # Example
/// ```text
/// amount = 100, ratios = [1, 1, 1]
///   naive shares: 33, 33, 33 (remainders 1, 1, 1), deficit 1
///   result:       34, 33, 33
/// ```
///
/// # Errors
/// - `InvalidRatios` when `ratios` is empty, all zero, or has a negative entry
/// - `Arithmetic` when `amount * r` overflows a fixed-width backend
pub fn allocate<C: Calculator>(
    calculator: &C,
    amount: &C::Amount,
    ratios: &[C::Amount],
) -> MoneyResult<Vec<C::Amount>> {
    assert_valid_ratios(calculator, ratios)?;

    let calc = calculator;
    let negative = calc.is_negative(amount);
    let magnitude = calc.absolute(amount)?;

    let mut total = calc.zero();
    for ratio in ratios {
        total = calc.add(&total, ratio)?;
    }

    let mut shares = Vec::with_capacity(ratios.len());
    let mut remainders = Vec::with_capacity(ratios.len());
    let mut distributed = calc.zero();

    for ratio in ratios {
        let product = calc.multiply(&magnitude, ratio)?;
        let (share, remainder) = calc.divide_with_remainder(&product, &total)?;
        distributed = calc.add(&distributed, &share)?;
        shares.push(share);
        remainders.push(remainder);
    }

    // Strictly fewer units than shares with a non-zero remainder
    let mut deficit = calc.subtract(&magnitude, &distributed)?;

    let mut recipients: Vec<usize> = (0..ratios.len())
        .filter(|&i| !calc.is_zero(&ratios[i]))
        .collect();
    recipients.sort_by(|&i, &j| match calc.compare(&remainders[j], &remainders[i]) {
        Ordering::Equal => i.cmp(&j),
        unequal => unequal,
    });

    tracing::trace!(
        calculator = calc.name(),
        shares = ratios.len(),
        deficit = %deficit,
        "distributing allocation remainder"
    );

    for index in recipients {
        if calc.is_zero(&deficit) {
            break;
        }
        shares[index] = calc.increment(&shares[index])?;
        deficit = calc.decrement(&deficit)?;
    }

    if negative {
        let zero = calc.zero();
        return shares
            .iter()
            .map(|share| calc.subtract(&zero, share).map_err(MoneyError::from))
            .collect();
    }

    Ok(shares)
}

impl<C: Calculator> Money<C> {
    /// Split this value across `ratios`.
    ///
    /// Ratios may carry their own scale. All ratios are brought to the highest
    /// ratio scale `h`; when `h > 0` the value is first raised by `h` digits so
    /// a split such as 50.5% / 49.5% stays exact. Results share this value's
    /// currency and sit at `self.scale() + h`.
    ///
    /// # Errors
    /// `InvalidRatios` when no valid distribution exists.
    pub fn allocate<R>(&self, ratios: &[R]) -> MoneyResult<Vec<Money<C>>>
    where
        R: Clone + Into<Ratio<C::Amount>>,
    {
        let calc = &self.calculator;
        let ratios: Vec<Ratio<C::Amount>> = ratios.iter().cloned().map(Into::into).collect();

        let highest = ratios.iter().map(|r| r.scale).max().unwrap_or(0);
        let weights = ratios
            .iter()
            .map(|r| -> MoneyResult<C::Amount> {
                let factor = scale_factor(calc, self.currency.base, highest - r.scale)?;
                Ok(calc.multiply(&r.amount, &factor)?)
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        let (amount, scale) = if highest > 0 {
            let factor = scale_factor(calc, self.currency.base, highest)?;
            let scale = widened_scale(self.scale, highest)?;
            (calc.multiply(&self.amount, &factor)?, scale)
        } else {
            (self.amount.clone(), self.scale)
        };

        Ok(allocate(calc, &amount, &weights)?
            .into_iter()
            .map(|share| self.rewrap(share, scale))
            .collect())
    }
}
