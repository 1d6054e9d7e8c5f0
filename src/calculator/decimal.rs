// ============================================================================
// Decimal Calculator
// rust_decimal backend restricted to whole numbers
// ============================================================================

use super::traits::Calculator;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Backend over [`rust_decimal::Decimal`].
///
/// Decimal can carry fractions, but money amounts are always whole minor
/// units: `parse` rejects fractional input and `is_integral` lets the guard
/// layer reject fractional amounts handed in directly. Quotients are
/// truncated so the backend stays closed over integers.
///
/// Range is 96 bits of mantissa (about ±7.9 × 10^28).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecimalCalculator;

impl Calculator for DecimalCalculator {
    type Amount = Decimal;

    fn name(&self) -> &'static str {
        "decimal"
    }

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn add(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        a.checked_add(*b)
            .map(|sum| sum.normalize())
            .ok_or_else(|| overflow_direction(b.is_sign_positive()))
    }

    fn subtract(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        a.checked_sub(*b)
            .map(|difference| difference.normalize())
            .ok_or_else(|| overflow_direction(b.is_sign_negative()))
    }

    fn multiply(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        a.checked_mul(*b)
            .map(|product| product.normalize())
            .ok_or_else(|| overflow_direction(a.is_sign_negative() == b.is_sign_negative()))
    }

    fn integer_divide(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        let remainder = self.modulo(a, b)?;
        // a - r is an exact multiple of b, so the quotient never rounds
        let exact = self.subtract(a, &remainder)?;
        divide_exact(&exact, b)
    }

    fn modulo(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        a.checked_rem(*b)
            .map(|remainder| remainder.normalize())
            .ok_or(NumericError::Overflow)
    }

    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    fn absolute(&self, a: &Decimal) -> NumericResult<Decimal> {
        Ok(a.abs().normalize())
    }

    fn is_integral(&self, a: &Decimal) -> bool {
        a.fract().is_zero()
    }

    /// Drops trailing zero digits, so `1050.00` is stored as `1050`.
    fn canonicalize(&self, a: Decimal) -> Decimal {
        a.normalize()
    }

    fn from_i64(&self, value: i64) -> NumericResult<Decimal> {
        Ok(Decimal::from(value))
    }

    fn from_i128(&self, value: i128) -> NumericResult<Decimal> {
        Decimal::try_from_i128_with_scale(value, 0).map_err(|_| overflow_direction(value >= 0))
    }

    fn parse(&self, input: &str) -> NumericResult<Decimal> {
        let value = Decimal::from_str_exact(input.trim()).map_err(|_| NumericError::InvalidInput)?;
        if !self.is_integral(&value) {
            return Err(NumericError::NonIntegral);
        }
        Ok(value.normalize())
    }

    fn to_i128(&self, a: &Decimal) -> Option<i128> {
        a.to_i128()
    }
}

fn divide_exact(dividend: &Decimal, divisor: &Decimal) -> NumericResult<Decimal> {
    dividend
        .checked_div(*divisor)
        .map(|q| q.trunc().normalize())
        .ok_or(NumericError::Overflow)
}

fn overflow_direction(positive: bool) -> NumericError {
    if positive {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integer_division_truncates() {
        let calc = DecimalCalculator;
        assert_eq!(calc.integer_divide(&dec!(7), &dec!(2)).unwrap(), dec!(3));
        assert_eq!(calc.integer_divide(&dec!(-7), &dec!(2)).unwrap(), dec!(-3));
        assert_eq!(calc.modulo(&dec!(-7), &dec!(2)).unwrap(), dec!(-1));
        assert_eq!(
            calc.integer_divide(&dec!(1), &Decimal::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse_rejects_fractions() {
        let calc = DecimalCalculator;
        assert_eq!(calc.parse("1050").unwrap(), dec!(1050));
        assert_eq!(calc.parse("1050.00").unwrap(), dec!(1050));
        assert_eq!(calc.parse("10.5"), Err(NumericError::NonIntegral));
        assert_eq!(calc.parse("ten"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_is_integral() {
        let calc = DecimalCalculator;
        assert!(calc.is_integral(&dec!(42)));
        assert!(!calc.is_integral(&dec!(4.2)));
    }

    #[test]
    fn test_power_and_overflow() {
        let calc = DecimalCalculator;
        assert_eq!(calc.power(&dec!(10), 3).unwrap(), dec!(1000));
        assert_eq!(calc.add(&Decimal::MAX, &dec!(1)), Err(NumericError::Overflow));
        assert_eq!(calc.subtract(&Decimal::MIN, &dec!(1)), Err(NumericError::Underflow));
    }

    #[test]
    fn test_results_drop_trailing_zero_digits() {
        let calc = DecimalCalculator;
        let padded = dec!(1050.00);
        assert_eq!(calc.canonicalize(padded).scale(), 0);
        assert_eq!(calc.modulo(&padded, &dec!(100)).unwrap().to_string(), "50");
        assert_eq!(calc.integer_divide(&padded, &dec!(100)).unwrap().to_string(), "10");
        assert_eq!(calc.add(&padded, &dec!(0.00)).unwrap().to_string(), "1050");
        assert_eq!(calc.multiply(&padded, &dec!(2)).unwrap().to_string(), "2100");
        assert_eq!(calc.absolute(&dec!(-5.0)).unwrap().to_string(), "5");
    }

    #[test]
    fn test_conversions() {
        let calc = DecimalCalculator;
        assert_eq!(calc.from_i64(-12).unwrap(), dec!(-12));
        assert_eq!(calc.to_i128(&dec!(1550)), Some(1550));
        assert!(calc.from_i128(i128::MAX).is_err());
    }
}
