// ============================================================================
// Guards
// Precondition checks every operation runs before touching amounts
// ============================================================================
//
// Each guard either returns normally or yields a typed MoneyError.
// Guards never mutate and never recover; call sites propagate with `?`.

use crate::calculator::Calculator;
use crate::domain::{Money, MoneyError, MoneyResult};

/// Fails with `DifferentCurrency` when the currency codes differ.
pub fn assert_same_currency<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<()> {
    if a.currency.same_code(&b.currency) {
        return Ok(());
    }

    tracing::debug!(left = %a.currency, right = %b.currency, "currency mismatch");
    Err(MoneyError::DifferentCurrency {
        left: a.currency.code().to_string(),
        right: b.currency.code().to_string(),
    })
}

/// N-ary form of [`assert_same_currency`]; every value is checked against the first.
pub fn assert_same_currencies<C: Calculator>(values: &[Money<C>]) -> MoneyResult<()> {
    if let Some((first, rest)) = values.split_first() {
        for value in rest {
            assert_same_currency(first, value)?;
        }
    }
    Ok(())
}

/// Fails with `DifferentScale` when the scales differ.
///
/// Used by operations that refuse to normalize.
pub fn assert_same_scale<C: Calculator>(a: &Money<C>, b: &Money<C>) -> MoneyResult<()> {
    if a.scale == b.scale {
        return Ok(());
    }

    tracing::debug!(left = a.scale, right = b.scale, "scale mismatch");
    Err(MoneyError::DifferentScale {
        left: a.scale,
        right: b.scale,
    })
}

/// Fails with `InvalidScale` when `scale` is negative or does not fit in `u32`.
pub fn assert_valid_scale(scale: i64) -> MoneyResult<u32> {
    u32::try_from(scale).map_err(|_| {
        tracing::debug!(scale, "invalid scale");
        MoneyError::InvalidScale { scale }
    })
}

/// Fails with `InvalidAmount` when the backend cannot hold `amount` as a whole
/// number of minor units.
pub fn assert_valid_amount<C: Calculator>(calculator: &C, amount: &C::Amount) -> MoneyResult<()> {
    if calculator.is_integral(amount) {
        return Ok(());
    }

    tracing::debug!(%amount, calculator = calculator.name(), "fractional amount");
    Err(MoneyError::InvalidAmount {
        amount: amount.to_string(),
        reason: crate::numeric::NumericError::NonIntegral,
    })
}

/// Fails with `EmptyInput` when an aggregate is handed no values.
pub fn assert_non_empty<T>(values: &[T], operation: &'static str) -> MoneyResult<()> {
    if values.is_empty() {
        tracing::debug!(operation, "empty input");
        return Err(MoneyError::EmptyInput { operation });
    }
    Ok(())
}

/// Fails with `InvalidRatios` when no valid distribution exists: the ratios
/// are empty, all zero, or one of them is negative.
pub fn assert_valid_ratios<C: Calculator>(calculator: &C, ratios: &[C::Amount]) -> MoneyResult<()> {
    let reason = if ratios.is_empty() {
        Some("at least one ratio is required")
    } else if ratios.iter().any(|r| calculator.is_negative(r)) {
        Some("ratios cannot be negative")
    } else if ratios.iter().all(|r| calculator.is_zero(r)) {
        Some("at least one ratio must be non-zero")
    } else {
        None
    };

    match reason {
        None => Ok(()),
        Some(reason) => {
            let ratios: Vec<String> = ratios.iter().map(ToString::to_string).collect();
            tracing::debug!(?ratios, reason, "invalid ratios");
            Err(MoneyError::InvalidRatios { ratios, reason })
        }
    }
}
