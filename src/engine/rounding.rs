// ============================================================================
// Scale Transformation
// Explicit rounding policy for moving a value to a narrower scale
// ============================================================================

use super::scale::{amount_at_scale, scale_factor};
use crate::calculator::Calculator;
use crate::domain::{Money, MoneyResult};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to resolve digits dropped by [`Money::transform_scale`].
///
/// Widening a scale never rounds; these modes only apply when narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward negative infinity
    Down,
    /// Toward positive infinity
    Up,
    /// Drop the digits (truncate)
    TowardZero,
    /// Away from zero whenever digits are dropped
    AwayFromZero,
    /// Nearest; ties toward positive infinity
    HalfUp,
    /// Nearest; ties toward negative infinity
    HalfDown,
    /// Nearest; ties to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Nearest; ties to the odd neighbour
    HalfOdd,
    /// Nearest; ties toward zero
    HalfTowardZero,
    /// Nearest; ties away from zero
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Divide `amount` by `divisor` (positive) rounding per this mode.
    pub(crate) fn divide<C: Calculator>(
        self,
        calc: &C,
        amount: &C::Amount,
        divisor: &C::Amount,
    ) -> MoneyResult<C::Amount> {
        let (quotient, remainder) = calc.divide_with_remainder(amount, divisor)?;
        if calc.is_zero(&remainder) {
            return Ok(quotient);
        }

        let positive = !calc.is_negative(amount);
        // The neighbour on the far side of zero from the truncated quotient
        let away = if positive {
            calc.increment(&quotient)?
        } else {
            calc.decrement(&quotient)?
        };
        let (floor, ceiling) = if positive {
            (quotient.clone(), away.clone())
        } else {
            (away.clone(), quotient.clone())
        };

        let rounded = match self {
            RoundingMode::Down => floor,
            RoundingMode::Up => ceiling,
            RoundingMode::TowardZero => quotient,
            RoundingMode::AwayFromZero => away,
            half => {
                let doubled = calc.multiply(&calc.absolute(&remainder)?, &calc.from_i64(2)?)?;
                match calc.compare(&doubled, divisor) {
                    Ordering::Less => quotient,
                    Ordering::Greater => away,
                    Ordering::Equal => match half {
                        RoundingMode::HalfUp => ceiling,
                        RoundingMode::HalfDown => floor,
                        RoundingMode::HalfTowardZero => quotient,
                        RoundingMode::HalfAwayFromZero => away,
                        RoundingMode::HalfEven => {
                            if is_even(calc, &quotient)? {
                                quotient
                            } else {
                                away
                            }
                        }
                        _ => {
                            if is_even(calc, &quotient)? {
                                away
                            } else {
                                quotient
                            }
                        }
                    },
                }
            }
        };

        Ok(rounded)
    }
}

fn is_even<C: Calculator>(calc: &C, value: &C::Amount) -> MoneyResult<bool> {
    let two = calc.from_i64(2)?;
    Ok(calc.is_zero(&calc.modulo(value, &two)?))
}

impl<C: Calculator> Money<C> {
    /// Re-express this value at `new_scale`.
    ///
    /// Raising the scale is exact. Lowering it divides by `base^Δ` and resolves
    /// the dropped digits with `rounding`; there is no implicit default.
    pub fn transform_scale(&self, new_scale: u32, rounding: RoundingMode) -> MoneyResult<Self> {
        if new_scale >= self.scale {
            return Ok(self.rewrap(amount_at_scale(self, new_scale)?, new_scale));
        }

        let calc = &self.calculator;
        let divisor = scale_factor(calc, self.currency.base, self.scale - new_scale)?;
        let amount = rounding.divide(calc, &self.amount, &divisor)?;
        tracing::trace!(from = self.scale, to = new_scale, ?rounding, "narrowed scale");
        Ok(self.rewrap(amount, new_scale))
    }

    /// Drop trailing zero digits, never going below the currency exponent.
    ///
    /// A value already below its currency exponent is raised to it.
    pub fn trim_scale(&self) -> MoneyResult<Self> {
        let calc = &self.calculator;
        let base = calc.from_i64(i64::from(self.currency.base))?;
        let floor = self.currency.exponent;

        let mut amount = self.amount.clone();
        let mut scale = self.scale;
        while scale > floor {
            let (quotient, remainder) = calc.divide_with_remainder(&amount, &base)?;
            if !calc.is_zero(&remainder) {
                break;
            }
            amount = quotient;
            scale -= 1;
        }

        if scale < floor {
            return self.transform_scale(floor, RoundingMode::TowardZero);
        }
        Ok(self.rewrap(amount, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{BigIntCalculator, I64Calculator};
    use crate::domain::iso4217::{JPY, MGA, USD};
    use crate::domain::Currency;
    use num_bigint::BigInt;

    fn money(amount: i64, currency: Currency, scale: u32) -> Money<I64Calculator> {
        Money::from_parts(I64Calculator, amount, currency, scale)
    }

    fn round(amount: i64, mode: RoundingMode) -> i64 {
        *money(amount, USD, 1)
            .transform_scale(0, mode)
            .unwrap()
            .amount()
    }

    #[test]
    fn test_transform_up_is_exact() {
        let up = money(1050, USD, 2).transform_scale(4, RoundingMode::Down).unwrap();
        assert_eq!(up, money(105_000, USD, 4));
    }

    #[test]
    fn test_directed_modes() {
        use RoundingMode::*;
        assert_eq!((round(15, Down), round(-15, Down)), (1, -2));
        assert_eq!((round(15, Up), round(-15, Up)), (2, -1));
        assert_eq!((round(17, TowardZero), round(-17, TowardZero)), (1, -1));
        assert_eq!((round(11, AwayFromZero), round(-11, AwayFromZero)), (2, -2));
        assert_eq!(round(20, Up), 2);
    }

    #[test]
    fn test_half_modes_off_tie() {
        use RoundingMode::*;
        for mode in [HalfUp, HalfDown, HalfEven, HalfOdd, HalfTowardZero, HalfAwayFromZero] {
            assert_eq!(round(14, mode), 1, "{mode:?}");
            assert_eq!(round(16, mode), 2, "{mode:?}");
            assert_eq!(round(-16, mode), -2, "{mode:?}");
        }
    }

    #[test]
    fn test_half_modes_on_tie() {
        use RoundingMode::*;
        assert_eq!((round(15, HalfUp), round(-15, HalfUp)), (2, -1));
        assert_eq!((round(15, HalfDown), round(-15, HalfDown)), (1, -2));
        assert_eq!((round(15, HalfEven), round(25, HalfEven)), (2, 2));
        assert_eq!(round(-25, HalfEven), -2);
        assert_eq!((round(15, HalfOdd), round(25, HalfOdd)), (1, 3));
        assert_eq!((round(15, HalfTowardZero), round(-15, HalfTowardZero)), (1, -1));
        assert_eq!((round(15, HalfAwayFromZero), round(-15, HalfAwayFromZero)), (2, -2));
    }

    #[test]
    fn test_non_decimal_base() {
        // 13 iraimbilanja at scale 1 (base 5) = 2.6 ariary -> 3 rounded
        let ariary = Money::from_parts(I64Calculator, 13, MGA, 1);
        let whole = ariary.transform_scale(0, RoundingMode::HalfEven).unwrap();
        assert_eq!(*whole.amount(), 3);
    }

    #[test]
    fn test_bigint_rounding() {
        let value = Money::from_parts(BigIntCalculator, BigInt::from(12345), USD, 3);
        let rounded = value.transform_scale(2, RoundingMode::HalfEven).unwrap();
        assert_eq!(*rounded.amount(), BigInt::from(1234));
    }

    #[test]
    fn test_trim_scale() {
        assert_eq!(money(105_000, USD, 4).trim_scale().unwrap(), money(1050, USD, 2));
        assert_eq!(money(105_010, USD, 4).trim_scale().unwrap(), money(10_501, USD, 3));
        assert_eq!(money(105_011, USD, 4).trim_scale().unwrap(), money(105_011, USD, 4));
        assert_eq!(money(5, USD, 0).trim_scale().unwrap(), money(500, USD, 2));
        assert_eq!(money(0, JPY, 3).trim_scale().unwrap(), money(0, JPY, 0));
    }
}
