// ============================================================================
// Calculator Trait
// Abstract arithmetic contract over an opaque numeric representation
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

/// Pluggable numeric backend.
///
/// Every money operation delegates its arithmetic to a `Calculator`, so the
/// guard, normalization and allocation logic never depends on how amounts are
/// stored. Implementations are stateless unit structs; they are cloned into
/// every value they produce, which costs nothing.
///
/// # Contract
/// - No method knows about currency or scale.
/// - Fixed-width backends must report `Overflow`/`Underflow` rather than wrap.
/// - `integer_divide` truncates toward zero and `modulo` takes the sign of the
///   dividend, so `a == b * (a / b) + a % b` always holds.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; amounts produced by them are plain
/// immutable data and can be shared across threads.
pub trait Calculator: Clone + fmt::Debug + Send + Sync + 'static {
    /// Opaque numeric representation handled by this backend.
    type Amount: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync;

    /// Backend name, used for logging and benchmarks.
    fn name(&self) -> &'static str;

    /// Additive identity.
    fn zero(&self) -> Self::Amount;

    /// Multiplicative identity.
    fn one(&self) -> Self::Amount;

    fn add(&self, a: &Self::Amount, b: &Self::Amount) -> NumericResult<Self::Amount>;

    fn subtract(&self, a: &Self::Amount, b: &Self::Amount) -> NumericResult<Self::Amount>;

    fn multiply(&self, a: &Self::Amount, b: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Division truncating toward zero.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    fn integer_divide(&self, a: &Self::Amount, b: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Remainder of truncating division; carries the sign of `a`.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is zero.
    fn modulo(&self, a: &Self::Amount, b: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Quotient and remainder in one call.
    ///
    /// Backends with a fused implementation should override this.
    fn divide_with_remainder(
        &self,
        a: &Self::Amount,
        b: &Self::Amount,
    ) -> NumericResult<(Self::Amount, Self::Amount)> {
        Ok((self.integer_divide(a, b)?, self.modulo(a, b)?))
    }

    /// Raise `base` to a non-negative integer power.
    ///
    /// The default uses exponentiation by squaring on top of `multiply`.
    fn power(&self, base: &Self::Amount, exponent: u32) -> NumericResult<Self::Amount> {
        let mut result = self.one();
        let mut factor = base.clone();
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.multiply(&result, &factor)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                factor = self.multiply(&factor, &factor)?;
            }
        }

        Ok(result)
    }

    /// Total order over amounts.
    fn compare(&self, a: &Self::Amount, b: &Self::Amount) -> Ordering;

    fn increment(&self, a: &Self::Amount) -> NumericResult<Self::Amount> {
        self.add(a, &self.one())
    }

    fn decrement(&self, a: &Self::Amount) -> NumericResult<Self::Amount> {
        self.subtract(a, &self.one())
    }

    fn absolute(&self, a: &Self::Amount) -> NumericResult<Self::Amount>;

    /// Largest value under `compare`; the first one wins on ties.
    ///
    /// # Errors
    /// `EmptyInput` when `values` is empty.
    fn maximum(&self, values: &[Self::Amount]) -> NumericResult<Self::Amount> {
        self.extremum(values, Ordering::Greater)
    }

    /// Smallest value under `compare`; the first one wins on ties.
    ///
    /// # Errors
    /// `EmptyInput` when `values` is empty.
    fn minimum(&self, values: &[Self::Amount]) -> NumericResult<Self::Amount> {
        self.extremum(values, Ordering::Less)
    }

    #[doc(hidden)]
    fn extremum(&self, values: &[Self::Amount], wanted: Ordering) -> NumericResult<Self::Amount> {
        let (first, rest) = values.split_first().ok_or(NumericError::EmptyInput)?;
        let mut best = first;
        for candidate in rest {
            if self.compare(candidate, best) == wanted {
                best = candidate;
            }
        }
        Ok(best.clone())
    }

    /// Whether `a` holds a whole number. Integer backends always do.
    fn is_integral(&self, _a: &Self::Amount) -> bool {
        true
    }

    fn is_zero(&self, a: &Self::Amount) -> bool {
        self.compare(a, &self.zero()) == Ordering::Equal
    }

    fn is_negative(&self, a: &Self::Amount) -> bool {
        self.compare(a, &self.zero()) == Ordering::Less
    }

    /// Canonical representation of `a`, for backends where equal values can
    /// be stored in more than one way. Applied to every amount the factory
    /// accepts.
    fn canonicalize(&self, a: Self::Amount) -> Self::Amount {
        a
    }

    // ------------------------------------------------------------------------
    // Boundary conversions (construction/serialization only)
    // ------------------------------------------------------------------------

    fn from_i64(&self, value: i64) -> NumericResult<Self::Amount>;

    fn from_i128(&self, value: i128) -> NumericResult<Self::Amount>;

    /// Parse a whole-number string such as `"-1050"`.
    fn parse(&self, input: &str) -> NumericResult<Self::Amount>;

    /// Host view of an amount, `None` when it does not fit in an `i128`.
    fn to_i128(&self, a: &Self::Amount) -> Option<i128>;
}
