// ============================================================================
// Native Integer Calculators
// Checked fixed-width backends (fast path, range-limited)
// ============================================================================

use super::traits::Calculator;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::num::IntErrorKind;

/// Implements [`Calculator`] for a primitive signed integer.
///
/// All arithmetic is checked; the direction of the failure follows the sign of
/// the mathematically exact result.
macro_rules! native_calculator {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Calculator for $name {
            type Amount = $ty;

            #[inline]
            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn zero(&self) -> $ty {
                0
            }

            #[inline]
            fn one(&self) -> $ty {
                1
            }

            #[inline]
            fn add(&self, a: &$ty, b: &$ty) -> NumericResult<$ty> {
                a.checked_add(*b).ok_or(if *b > 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                })
            }

            #[inline]
            fn subtract(&self, a: &$ty, b: &$ty) -> NumericResult<$ty> {
                a.checked_sub(*b).ok_or(if *b < 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                })
            }

            #[inline]
            fn multiply(&self, a: &$ty, b: &$ty) -> NumericResult<$ty> {
                a.checked_mul(*b).ok_or(if (*a < 0) != (*b < 0) {
                    NumericError::Underflow
                } else {
                    NumericError::Overflow
                })
            }

            #[inline]
            fn integer_divide(&self, a: &$ty, b: &$ty) -> NumericResult<$ty> {
                if *b == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                // MIN / -1 is the only other failure
                a.checked_div(*b).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn modulo(&self, a: &$ty, b: &$ty) -> NumericResult<$ty> {
                if *b == 0 {
                    return Err(NumericError::DivisionByZero);
                }
                // MIN % -1 is mathematically zero
                Ok(a.wrapping_rem(*b))
            }

            #[inline]
            fn power(&self, base: &$ty, exponent: u32) -> NumericResult<$ty> {
                base.checked_pow(exponent).ok_or(
                    if *base < 0 && exponent % 2 == 1 {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    },
                )
            }

            #[inline]
            fn compare(&self, a: &$ty, b: &$ty) -> Ordering {
                a.cmp(b)
            }

            #[inline]
            fn absolute(&self, a: &$ty) -> NumericResult<$ty> {
                a.checked_abs().ok_or(NumericError::Overflow)
            }

            fn from_i64(&self, value: i64) -> NumericResult<$ty> {
                <$ty>::try_from(value).map_err(|_| overflow_direction(i128::from(value)))
            }

            fn from_i128(&self, value: i128) -> NumericResult<$ty> {
                <$ty>::try_from(value).map_err(|_| overflow_direction(value))
            }

            fn parse(&self, input: &str) -> NumericResult<$ty> {
                input.trim().parse::<$ty>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow => NumericError::Overflow,
                    IntErrorKind::NegOverflow => NumericError::Underflow,
                    _ => NumericError::InvalidInput,
                })
            }

            #[inline]
            fn to_i128(&self, a: &$ty) -> Option<i128> {
                Some(i128::from(*a))
            }
        }
    };
}

fn overflow_direction(value: i128) -> NumericError {
    if value < 0 {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

native_calculator!(
    /// 64-bit backend. Covers about ±9.2 × 10^18 minor units.
    I64Calculator,
    i64,
    "i64"
);

native_calculator!(
    /// 128-bit backend. Covers about ±1.7 × 10^38 minor units.
    I128Calculator,
    i128,
    "i128"
);
