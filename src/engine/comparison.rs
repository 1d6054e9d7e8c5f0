// ============================================================================
// Comparison Operations
// Ordering, equality, extrema and sign predicates
// ============================================================================

use super::scale::{normalize_all, normalize_pair, scale_factor};
use crate::calculator::Calculator;
use crate::domain::{Money, MoneyResult};
use crate::guards::{assert_non_empty, assert_same_currencies, assert_same_currency};
use std::cmp::Ordering;

impl<C: Calculator> Money<C> {
    /// Scale-aware ordering of two values of the same currency.
    ///
    /// # Errors
    /// `DifferentCurrency` when the codes differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        assert_same_currency(self, other)?;
        let (a, b, _) = normalize_pair(self, other)?;
        Ok(self.calculator.compare(&a, &b))
    }

    /// Whether both values denote the same magnitude in the same currency.
    ///
    /// `10.5` at scale 1 equals `10.50` at scale 2.
    pub fn equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Largest value, expressed at the largest scale present.
    ///
    /// # Errors
    /// `EmptyInput` or `DifferentCurrency`.
    pub fn maximum(values: &[Self]) -> MoneyResult<Self> {
        Self::extremum(values, "maximum", Ordering::Greater)
    }

    /// Smallest value, expressed at the largest scale present.
    ///
    /// # Errors
    /// `EmptyInput` or `DifferentCurrency`.
    pub fn minimum(values: &[Self]) -> MoneyResult<Self> {
        Self::extremum(values, "minimum", Ordering::Less)
    }

    fn extremum(values: &[Self], operation: &'static str, wanted: Ordering) -> MoneyResult<Self> {
        assert_non_empty(values, operation)?;
        assert_same_currencies(values)?;

        let first = &values[0];
        let calc = &first.calculator;
        let (amounts, scale) = normalize_all(values)?;
        let amount = match wanted {
            Ordering::Greater => calc.maximum(&amounts)?,
            _ => calc.minimum(&amounts)?,
        };
        Ok(first.rewrap(amount, scale))
    }

    /// Whether every value shares one currency code. Vacuously true when empty.
    pub fn have_same_currency(values: &[Self]) -> bool {
        assert_same_currencies(values).is_ok()
    }

    /// Whether every value denotes the same amount once scales are aligned.
    ///
    /// Currencies are not checked. Vacuously true when empty.
    pub fn have_same_amount(values: &[Self]) -> MoneyResult<bool> {
        let Some(first) = values.first() else {
            return Ok(true);
        };
        let (amounts, _) = normalize_all(values)?;
        let calc = &first.calculator;
        Ok(amounts
            .windows(2)
            .all(|pair| calc.compare(&pair[0], &pair[1]) == Ordering::Equal))
    }

    pub fn is_zero(&self) -> bool {
        self.calculator.is_zero(&self.amount)
    }

    pub fn is_positive(&self) -> bool {
        self.calculator.compare(&self.amount, &self.calculator.zero()) == Ordering::Greater
    }

    pub fn is_negative(&self) -> bool {
        self.calculator.is_negative(&self.amount)
    }

    /// Whether the amount has a fractional part in whole currency units.
    pub fn has_sub_units(&self) -> MoneyResult<bool> {
        let calc = &self.calculator;
        let unit = scale_factor(calc, self.currency.base, self.scale)?;
        let remainder = calc.modulo(&self.amount, &unit)?;
        Ok(!calc.is_zero(&remainder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::I64Calculator;
    use crate::domain::iso4217::{EUR, USD};
    use crate::domain::Currency;
    use crate::MoneyError;

    fn money(amount: i64, currency: Currency, scale: u32) -> Money<I64Calculator> {
        Money::from_parts(I64Calculator, amount, currency, scale)
    }

    #[test]
    fn test_compare_across_scales() {
        let a = money(105, USD, 1);
        let b = money(1050, USD, 2);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Equal);
        assert!(a.equal(&b).unwrap());
        assert!(money(1051, USD, 2).greater_than(&a).unwrap());
        assert!(money(1, USD, 0).less_than(&money(101, USD, 2)).unwrap());
        assert!(a.greater_than_or_equal(&b).unwrap());
        assert!(a.less_than_or_equal(&b).unwrap());
    }

    #[test]
    fn test_compare_different_currency() {
        assert!(matches!(
            money(1, USD, 0).equal(&money(1, EUR, 0)),
            Err(MoneyError::DifferentCurrency { .. })
        ));
    }

    #[test]
    fn test_maximum_and_minimum() {
        let values = [money(100, USD, 0), money(99, USD, 0), money(150, USD, 0)];
        assert_eq!(Money::maximum(&values).unwrap(), money(150, USD, 0));
        assert_eq!(Money::minimum(&values).unwrap(), money(99, USD, 0));
    }

    #[test]
    fn test_extrema_normalize() {
        let values = [money(5, USD, 0), money(499, USD, 2)];
        assert_eq!(Money::maximum(&values).unwrap(), money(500, USD, 2));
        assert_eq!(Money::minimum(&values).unwrap(), money(499, USD, 2));
    }

    #[test]
    fn test_extrema_guards() {
        assert_eq!(
            Money::<I64Calculator>::maximum(&[]),
            Err(MoneyError::EmptyInput {
                operation: "maximum"
            })
        );
        assert!(matches!(
            Money::minimum(&[money(1, USD, 0), money(1, EUR, 0)]),
            Err(MoneyError::DifferentCurrency { .. })
        ));
    }

    #[test]
    fn test_have_same() {
        assert!(Money::have_same_currency(&[money(1, USD, 0), money(2, USD, 3)]));
        assert!(!Money::have_same_currency(&[money(1, USD, 0), money(1, EUR, 0)]));
        assert!(Money::have_same_amount(&[money(1, USD, 0), money(100, USD, 2)]).unwrap());
        assert!(!Money::have_same_amount(&[money(1, USD, 0), money(101, USD, 2)]).unwrap());
        assert!(Money::<I64Calculator>::have_same_amount(&[]).unwrap());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(money(0, USD, 2).is_zero());
        assert!(money(1, USD, 2).is_positive());
        assert!(money(-1, USD, 2).is_negative());
        assert!(!money(0, USD, 2).is_positive());
    }

    #[test]
    fn test_has_sub_units() {
        assert!(money(1050, USD, 2).has_sub_units().unwrap());
        assert!(!money(1000, USD, 2).has_sub_units().unwrap());
        assert!(!money(7, USD, 0).has_sub_units().unwrap());
    }
}
