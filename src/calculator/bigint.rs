// ============================================================================
// Arbitrary-Precision Calculator
// num-bigint backend (safe path, unlimited magnitude)
// ============================================================================

use super::traits::Calculator;
use crate::numeric::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

/// Backend over [`num_bigint::BigInt`].
///
/// Never overflows; the only failures are division by zero and unparsable
/// input. Cost grows with magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigIntCalculator;

impl Calculator for BigIntCalculator {
    type Amount = BigInt;

    fn name(&self) -> &'static str {
        "bigint"
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> NumericResult<BigInt> {
        Ok(a + b)
    }

    fn subtract(&self, a: &BigInt, b: &BigInt) -> NumericResult<BigInt> {
        Ok(a - b)
    }

    fn multiply(&self, a: &BigInt, b: &BigInt) -> NumericResult<BigInt> {
        Ok(a * b)
    }

    fn integer_divide(&self, a: &BigInt, b: &BigInt) -> NumericResult<BigInt> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(a / b)
    }

    fn modulo(&self, a: &BigInt, b: &BigInt) -> NumericResult<BigInt> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(a % b)
    }

    fn divide_with_remainder(&self, a: &BigInt, b: &BigInt) -> NumericResult<(BigInt, BigInt)> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(a.div_rem(b))
    }

    fn power(&self, base: &BigInt, exponent: u32) -> NumericResult<BigInt> {
        Ok(base.pow(exponent))
    }

    fn compare(&self, a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }

    fn absolute(&self, a: &BigInt) -> NumericResult<BigInt> {
        Ok(a.abs())
    }

    fn is_zero(&self, a: &BigInt) -> bool {
        a.is_zero()
    }

    fn from_i64(&self, value: i64) -> NumericResult<BigInt> {
        Ok(BigInt::from(value))
    }

    fn from_i128(&self, value: i128) -> NumericResult<BigInt> {
        Ok(BigInt::from(value))
    }

    fn parse(&self, input: &str) -> NumericResult<BigInt> {
        input
            .trim()
            .parse::<BigInt>()
            .map_err(|_| NumericError::InvalidInput)
    }

    fn to_i128(&self, a: &BigInt) -> Option<i128> {
        a.to_i128()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overflow() {
        let calc = BigIntCalculator;
        let max = calc.from_i64(i64::MAX).unwrap();
        let doubled = calc.multiply(&max, &BigInt::from(2)).unwrap();
        assert_eq!(doubled.to_string(), "18446744073709551614");
        assert_eq!(calc.to_i128(&doubled), Some(18_446_744_073_709_551_614));
    }

    #[test]
    fn test_truncating_division() {
        let calc = BigIntCalculator;
        let (q, r) = calc
            .divide_with_remainder(&BigInt::from(-7), &BigInt::from(2))
            .unwrap();
        assert_eq!(q, BigInt::from(-3));
        assert_eq!(r, BigInt::from(-1));
        assert_eq!(
            calc.modulo(&BigInt::from(1), &BigInt::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_large_power() {
        let calc = BigIntCalculator;
        let p = calc.power(&BigInt::from(10), 40).unwrap();
        assert_eq!(p.to_string(), format!("1{}", "0".repeat(40)));
        assert_eq!(calc.to_i128(&p), None);
    }

    #[test]
    fn test_parse() {
        let calc = BigIntCalculator;
        let v = calc.parse("123456789012345678901234567890").unwrap();
        assert_eq!(v.to_string(), "123456789012345678901234567890");
        assert_eq!(calc.parse("1.5"), Err(NumericError::InvalidInput));
    }
}
